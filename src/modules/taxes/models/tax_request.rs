use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::error::AppError;

/// Inbound tax calculation request.
///
/// All fields default when absent so a partial body still reaches the
/// validator and reports the first violated rule rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub state: String,
    pub year: i32,
    pub product_category: String,
}

impl TaxRequest {
    /// Validate the request, returning a copy with the state code trimmed
    /// and upper-cased.
    ///
    /// Rules are checked in a fixed order and the first violation wins; the
    /// messages are part of the API contract.
    pub fn validate(self) -> Result<TaxRequest, AppError> {
        let state = self.state.trim().to_uppercase();

        if self.amount <= Decimal::ZERO {
            return Err(AppError::validation("Amount must be greater than zero"));
        }
        if state.len() < 2 {
            return Err(AppError::validation("State code is required (e.g., NY)"));
        }
        if !(1000..=9999).contains(&self.year) {
            return Err(AppError::validation("Year must be a 4-digit number"));
        }
        if self.product_category.is_empty() {
            return Err(AppError::validation("Category is required"));
        }

        Ok(TaxRequest { state, ..self })
    }
}
