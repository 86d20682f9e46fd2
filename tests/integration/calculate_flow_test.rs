// Integration tests for the full request/response cycle, run in-process
// against the same app configuration `main` uses (rate table injection,
// CORS headers middleware, route setup).

use actix_web::{dev::ServiceResponse, http::StatusCode, test, web, App};
use serde_json::{json, Value};

use tax_engine::taxes::controllers::{configure_tax_routes, cors_headers};
use tax_engine::taxes::RateTable;

// The concrete service type returned by init_service is not nameable, so the
// app is built through a macro instead of an async helper.
macro_rules! spawn_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(RateTable::default()))
                .wrap(cors_headers())
                .configure(configure_tax_routes),
        )
        .await
    };
}

fn assert_cors_headers<B>(response: &ServiceResponse<B>) {
    let headers = response.headers();
    assert_eq!(
        headers.get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );
    assert_eq!(
        headers.get("Access-Control-Allow-Methods").unwrap(),
        "POST, OPTIONS"
    );
    assert_eq!(
        headers.get("Access-Control-Allow-Headers").unwrap(),
        "Content-Type"
    );
}

#[actix_web::test]
async fn test_successful_calculation() {
    let app = spawn_app!();

    let request = test::TestRequest::post()
        .uri("/calculate")
        .set_json(json!({
            "amount": 100.0,
            "state": "ny",
            "year": 2024,
            "productCategory": "electronics"
        }))
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["baseAmount"], json!(100.0));
    assert_eq!(body["data"]["taxAmount"], json!(8.8));
    assert_eq!(body["data"]["total"], json!(108.8));
    assert_eq!(body["data"]["rate"], json!(0.088));
    assert_eq!(body["data"]["state"], json!("NY"));
    assert_eq!(body["data"]["year"], json!(2024));
    assert!(body.get("error").is_none());
}

#[actix_web::test]
async fn test_validation_failures_return_envelope() {
    let app = spawn_app!();

    let cases = [
        (
            json!({"amount": 0, "state": "NY", "year": 2024, "productCategory": "electronics"}),
            "Amount must be greater than zero",
        ),
        (
            json!({"amount": 100.0, "state": "N", "year": 2024, "productCategory": "electronics"}),
            "State code is required (e.g., NY)",
        ),
        (
            json!({"amount": 100.0, "state": "NY", "year": 202, "productCategory": "electronics"}),
            "Year must be a 4-digit number",
        ),
        (
            json!({"amount": 100.0, "state": "NY", "year": 2024, "productCategory": ""}),
            "Category is required",
        ),
    ];

    for (payload, expected_message) in cases {
        let request = test::TestRequest::post()
            .uri("/calculate")
            .set_json(&payload)
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "payload: {}",
            payload
        );
        assert_cors_headers(&response);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!(expected_message));
        assert!(body.get("data").is_none());
    }
}

#[actix_web::test]
async fn test_malformed_json_body() {
    let app = spawn_app!();

    let request = test::TestRequest::post()
        .uri("/calculate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not valid json")
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors_headers(&response);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Invalid JSON format"));
}

#[actix_web::test]
async fn test_unmatched_rule_reports_miss_message() {
    let app = spawn_app!();

    let request = test::TestRequest::post()
        .uri("/calculate")
        .set_json(json!({
            "amount": 100.0,
            "state": "ny",
            "year": 2024,
            "productCategory": "furniture"
        }))
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(false));
    // State normalized, category echoed exactly as submitted.
    assert_eq!(
        body["error"],
        json!("Tax rules for NY in 2024 are not available for the furniture category.")
    );
}

#[actix_web::test]
async fn test_options_preflight() {
    let app = spawn_app!();

    let request = test::TestRequest::with_uri("/calculate")
        .method(actix_web::http::Method::OPTIONS)
        .to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);

    let body = test::read_body(response).await;
    assert!(body.is_empty(), "preflight body must be empty");
}

#[actix_web::test]
async fn test_get_is_method_not_allowed_plain_text() {
    let app = spawn_app!();

    let request = test::TestRequest::get().uri("/calculate").to_request();

    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_cors_headers(&response);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        content_type.starts_with("text/plain"),
        "405 must not be the JSON envelope, got {}",
        content_type
    );

    let body = test::read_body(response).await;
    assert_eq!(std::str::from_utf8(&body).unwrap(), "Method not allowed");
}

#[actix_web::test]
async fn test_concurrent_requests_share_the_table() {
    let app = spawn_app!();

    // The table is read-only and shared; interleaved requests must not
    // interfere with each other.
    for (state, category, tax) in [
        ("ny", "electronics", 8.8),
        ("ca", "clothing", 7.5),
        ("tx", "services", 0.0),
    ] {
        let request = test::TestRequest::post()
            .uri("/calculate")
            .set_json(json!({
                "amount": 100.0,
                "state": state,
                "year": 2024,
                "productCategory": category
            }))
            .to_request();

        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["taxAmount"], json!(tax));
    }
}
