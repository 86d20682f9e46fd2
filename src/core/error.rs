use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::modules::taxes::models::ApiResponse;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request field failed a validation rule; the message is the
    /// client-facing text and is part of the API contract.
    #[error("{0}")]
    Validation(String),

    /// Request body was not decodable as JSON
    #[error("Invalid JSON format")]
    InvalidJson,

    /// No tax rule matches the (state, year, category) triple
    #[error("Tax rules for {state} in {year} are not available for the {category} category.")]
    RuleNotFound {
        state: String,
        year: i32,
        category: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    /// Single JSON error-building routine: every error surfaced to the
    /// client goes through the same `{"success":false,"error":...}` envelope.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.to_string()))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidJson => StatusCode::BAD_REQUEST,
            AppError::RuleNotFound { .. } => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
