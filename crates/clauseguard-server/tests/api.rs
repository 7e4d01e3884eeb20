//! Integration tests for the ClauseGuard HTTP API
//!
//! The router is driven in-process; no socket is bound.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use clauseguard_server::config::ReviewConfig;
use clauseguard_server::server::build_app;
use clauseguard_server::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "clauseguard-test-boundary";

const CONTRACT: &str =
    "Party A may terminate immediately if Party B defaults. Party B must pay rent monthly.";

fn app_with(config: ReviewConfig) -> Router {
    build_app(AppState::new(config, None).expect("state"))
}

fn app() -> Router {
    app_with(ReviewConfig::default())
}

fn multipart_request(uri: &str, field: &str, file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_index_page() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(r#"accept=".pdf,.docx,.txt""#));
}

#[tokio::test]
async fn test_rules_endpoint_lists_builtin_table() {
    let request = Request::get("/api/rules").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "builtin");
    assert_eq!(body["rules"].as_array().unwrap().len(), 5);
    assert_eq!(body["rules"][0]["trigger_phrase"], "sole discretion");
}

#[tokio::test]
async fn test_review_text() {
    let request = json_request("/api/review", serde_json::json!({ "text": CONTRACT }));
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let spans = body["spans"].as_array().unwrap();
    assert_eq!(spans.len(), 2);
    assert_eq!(
        spans[0]["text"],
        "Party A may terminate immediately if Party B defaults. "
    );
    assert_eq!(spans[0]["label"], "Medium Risk");
    assert_eq!(spans[0]["color"], "orange");
    assert_eq!(spans[1]["label"], "OK");
    assert_eq!(spans[1]["color"], "green");

    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["issue"], "Too harsh, no grace period.");
}

#[tokio::test]
async fn test_review_empty_text() {
    let request = json_request("/api/review", serde_json::json!({ "text": "" }));
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["spans"].as_array().unwrap().is_empty());
    assert!(body["reviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_extract_upload() {
    let request = multipart_request("/api/extract", "file", "lease.txt", CONTRACT.as_bytes());
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file_name"], "lease.txt");
    assert_eq!(body["format"], "text");
    assert_eq!(body["text"], CONTRACT);
}

#[tokio::test]
async fn test_review_upload_with_unknown_suffix() {
    let request = multipart_request(
        "/api/review/upload",
        "file",
        "notes.xyz",
        b"Party A shall not be held liable for any damages.",
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["format"], "text");
    assert_eq!(body["report"]["spans"][0]["label"], "High Risk");
    assert_eq!(body["report"]["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(body["summary"]["high"], 1);
}

#[tokio::test]
async fn test_strict_formats_rejects_unknown_suffix() {
    let config = ReviewConfig {
        strict_formats: true,
        ..ReviewConfig::default()
    };
    let request = multipart_request("/api/review/upload", "file", "notes.xyz", CONTRACT.as_bytes());
    let (status, body) = send(app_with(config), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("unsupported format"));
}

#[tokio::test]
async fn test_invalid_utf8_is_extraction_failure() {
    let request = multipart_request("/api/review/upload", "file", "terms.txt", &[0xff, 0xfe, 0xfd]);
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("extraction error"));
    assert!(body.get("report").is_none());
}

#[tokio::test]
async fn test_malformed_pdf_upload() {
    let request = multipart_request("/api/extract", "file", "scan.pdf", b"not really a pdf");
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_file_field() {
    let request = multipart_request("/api/extract", "attachment", "lease.txt", CONTRACT.as_bytes());
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("'file'"));
}

#[tokio::test]
async fn test_review_missing_text_field() {
    let request = json_request("/api/review", serde_json::json!({ "txt": 1 }));
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("missing field `text`"));
}

#[tokio::test]
async fn test_review_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/review")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_review_wrong_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/review")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(CONTRACT))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("application/json"));
}

#[tokio::test]
async fn test_extract_requires_multipart() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/extract")
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .body(Body::from(CONTRACT))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_review_upload_requires_multipart() {
    let request = json_request("/api/review/upload", serde_json::json!({ "text": CONTRACT }));
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let config = ReviewConfig {
        max_upload_bytes: 64,
        ..ReviewConfig::default()
    };
    let content = CONTRACT.repeat(10);
    let request = multipart_request("/api/extract", "file", "lease.txt", content.as_bytes());
    let (status, _) = send(app_with(config), request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let response = app()
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_custom_rule_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.yaml");
    std::fs::write(
        &path,
        "name: lease\nrules:\n  - trigger_phrase: \"pay rent\"\n    severity: medium\n    issue: \"Rent terms\"\n    suggestion: \"State the amount\"\n",
    )
    .unwrap();

    let config = ReviewConfig {
        rules_path: Some(path),
        ..ReviewConfig::default()
    };
    let request = json_request("/api/review", serde_json::json!({ "text": CONTRACT }));
    let (status, body) = send(app_with(config), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["spans"][0]["label"], "OK");
    assert_eq!(body["spans"][1]["label"], "Medium Risk");
    assert_eq!(body["reviews"][0]["issue"], "Rent terms");
}
