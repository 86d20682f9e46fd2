//! Tax controller for HTTP endpoints
//!
//! Orchestrates one request/response cycle: decode JSON, validate, look up
//! the rate, calculate, and wrap the result in the API envelope. Every
//! JSON-producing failure path routes through `AppError`'s response impl.

use actix_web::{error::ResponseError, http::Method, middleware::DefaultHeaders, web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::taxes::models::{ApiResponse, TaxRequest, TaxResponse};
use crate::modules::taxes::repositories::RateTable;
use crate::modules::taxes::services::TaxCalculator;

/// Calculate sales tax for one request
///
/// POST /calculate
///
/// Errors are converted to responses here rather than propagated, so the
/// envelope still passes through the response middleware (CORS headers must
/// land on failures too).
pub async fn calculate(table: web::Data<RateTable>, body: web::Bytes) -> HttpResponse {
    match process(table.get_ref(), &body) {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::ok(data)),
        Err(err) => {
            tracing::debug!("calculation rejected: {}", err);
            err.error_response()
        }
    }
}

/// Decode → validate → lookup → calculate.
fn process(table: &RateTable, body: &[u8]) -> Result<TaxResponse, AppError> {
    let request: TaxRequest = serde_json::from_slice(body).map_err(|_| AppError::InvalidJson)?;

    let request = request.validate()?;

    // Category is echoed exactly as submitted in the miss message; only the
    // state code is normalized.
    let rate = table
        .find_rate(&request.state, request.year, &request.product_category)
        .ok_or_else(|| AppError::RuleNotFound {
            state: request.state.clone(),
            year: request.year,
            category: request.product_category.clone(),
        })?;

    let breakdown = TaxCalculator::new().calculate(request.amount, rate);

    tracing::debug!(
        state = %request.state,
        year = request.year,
        category = %request.product_category,
        rate = %rate,
        "calculated tax"
    );

    Ok(TaxResponse::from_parts(&request, &breakdown))
}

/// Cross-origin preflight
///
/// OPTIONS /calculate
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

// Other methods get a bare plain-text 405, never the JSON envelope.
async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .content_type("text/plain; charset=utf-8")
        .body("Method not allowed")
}

/// Cross-origin headers sent unconditionally with every response,
/// including 4xx and the bare 405.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// Configure tax routes
pub fn configure_tax_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/calculate")
            .route(web::post().to(calculate))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}
