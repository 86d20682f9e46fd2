use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::taxes::models::TaxRequest;
use crate::modules::taxes::services::TaxBreakdown;

/// Successful calculation payload echoed back to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub state: String,
    pub year: i32,
}

impl TaxResponse {
    /// Map a validated request and its calculation into the response payload.
    pub fn from_parts(request: &TaxRequest, breakdown: &TaxBreakdown) -> Self {
        Self {
            base_amount: request.amount,
            tax_amount: breakdown.tax_amount,
            total: breakdown.total,
            rate: breakdown.rate,
            state: request.state.clone(),
            year: request.year,
        }
    }
}

/// Tagged success/failure envelope returned for every JSON response.
///
/// Exactly one of `data` / `error` is serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TaxResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: TaxResponse) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
