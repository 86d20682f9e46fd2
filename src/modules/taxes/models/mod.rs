pub mod api_response;
pub mod tax_request;

pub use api_response::{ApiResponse, TaxResponse};
pub use tax_request::TaxRequest;
