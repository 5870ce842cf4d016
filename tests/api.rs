use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::{
    matchers::{body_partial_json, body_string_contains, method, path},
    Mock, MockServer, ResponseTemplate,
};

use portfolio_api::{
    catalog::StaticCatalog, create_router, notifier::Notifier, AppState, TelegramConfig,
};

fn app_with_telegram(telegram: TelegramConfig) -> Router {
    let notifier = Notifier::new(telegram).expect("notifier builds");
    create_router(AppState::new(notifier, StaticCatalog::with_default_projects()))
}

/// App whose notifier has no credentials; any send attempt would be a bug,
/// so the API base points at an unroutable address.
fn app_without_credentials() -> Router {
    app_with_telegram(TelegramConfig {
        bot_token: String::new(),
        chat_id: String::new(),
        api_base: "http://127.0.0.1:1".to_string(),
    })
}

fn contact_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_constant_body() {
    let response = app_without_credentials()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "ok", "service": "portfolio-api" })
    );
}

#[tokio::test]
async fn projects_list_is_stable_across_requests() {
    let app = app_without_credentials();

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/projects")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(json_body(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);

    let records = bodies[0].as_array().expect("array of projects");
    assert_eq!(records.len(), 10);
    assert_eq!(records[0]["id"], "shoghlana");
    assert_eq!(records[0]["hasChat"], true);
    // Records without demo links omit the key entirely
    assert!(records[1].get("demoLink").is_none());
}

#[tokio::test]
async fn contact_with_missing_required_field_is_rejected() {
    let response = app_without_credentials()
        .oneshot(contact_request(
            json!({ "name": "", "email": "a@x.com", "message": "hi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({ "success": false, "error": "Name, email and message are required" })
    );
}

#[tokio::test]
async fn contact_with_whitespace_only_fields_is_rejected() {
    let response = app_without_credentials()
        .oneshot(contact_request(
            json!({ "name": "A", "email": "a@x.com", "message": "   \n\t" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["success"], false);
}

#[tokio::test]
async fn contact_without_body_is_treated_as_empty_submission() {
    let response = app_without_credentials()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({ "success": false, "error": "Name, email and message are required" })
    );
}

#[tokio::test]
async fn contact_without_credentials_reports_not_sent() {
    let response = app_without_credentials()
        .oneshot(contact_request(
            json!({ "name": "A", "email": "a@x.com", "message": "hi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "success": false }));
}

#[tokio::test]
async fn contact_relays_to_telegram_with_subject_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_partial_json(json!({
            "chat_id": "42",
            "parse_mode": "HTML",
            "disable_web_page_preview": true,
        })))
        .and(body_string_contains("<b>Name:</b> A"))
        .and(body_string_contains("<b>Subject:</b> —"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_with_telegram(TelegramConfig {
        bot_token: "123:abc".to_string(),
        chat_id: "42".to_string(),
        api_base: server.uri(),
    });

    let response = app
        .oneshot(contact_request(
            json!({ "name": "A", "email": "a@x.com", "message": "hi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "success": true }));
}

#[tokio::test]
async fn contact_reports_not_sent_when_provider_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_with_telegram(TelegramConfig {
        bot_token: "123:abc".to_string(),
        chat_id: "42".to_string(),
        api_base: server.uri(),
    });

    let response = app
        .oneshot(contact_request(
            json!({ "name": "A", "email": "a@x.com", "message": "hi" }),
        ))
        .await
        .unwrap();

    // A failed notification is not an HTTP error for the form submitter
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "success": false }));
}

#[tokio::test]
async fn contact_preflight_returns_empty_204() {
    let response = app_without_credentials()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn contact_preflight_keeps_cors_headers() {
    let response = app_without_credentials()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/contact")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = app_without_credentials()
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
