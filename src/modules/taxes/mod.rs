pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ApiResponse, TaxRequest, TaxResponse};
pub use repositories::{RateTable, TaxRule};
pub use services::TaxCalculator;
