//! End-to-end tests for the HTTP surface.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; a
//! real axum server on `127.0.0.1:0` stands in for the Groq backend.

use std::sync::Arc;

use api::{AppState, build_router};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    routing::{get, post},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use qa_llm_service::{CelebrityQa, FALLBACK_ANSWER, HealthService, QaModelConfig};

const CHAT_OK_BODY: &str =
    r#"{"choices":[{"message":{"role":"assistant","content":"Forrest Gump"}}]}"#;

async fn spawn_upstream(chat_status: StatusCode, chat_body: &'static str) -> String {
    let app = Router::new()
        .route(
            "/v1/chat/completions",
            post(move || async move {
                (
                    chat_status,
                    [(header::CONTENT_TYPE, "application/json")],
                    chat_body,
                )
            }),
        )
        .route("/v1/models", get(|| async { r#"{"data":[]}"# }));
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn test_state(endpoint: &str, upload_limit_mb: usize) -> Arc<AppState> {
    let qa_config = QaModelConfig {
        model: "meta-llama/llama-4-scout-17b-16e-instruct".into(),
        endpoint: endpoint.into(),
        api_key: Some("gsk-test".into()),
        max_tokens: Some(512),
        temperature: Some(0.5),
        timeout_secs: Some(5),
    };

    Arc::new(AppState {
        bind_address: "127.0.0.1:0".into(),
        upload_limit_mb,
        qa: Arc::new(CelebrityQa::new(qa_config.clone()).unwrap()),
        qa_config,
        health: Arc::new(HealthService::new(Some(2)).unwrap()),
    })
}

fn ask_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(field: &str, file_name: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "qa-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn png_payload(len: usize) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.resize(len, 0);
    bytes
}

#[tokio::test]
async fn ask_returns_upstream_answer() {
    let endpoint = spawn_upstream(StatusCode::OK, CHAT_OK_BODY).await;
    let app = build_router(test_state(&endpoint, 16));

    let response = app
        .oneshot(ask_request(
            r#"{"name":"Tom Hanks","question":"What is his most famous role?"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["answer"], "Forrest Gump");
}

#[tokio::test]
async fn ask_surfaces_fallback_when_upstream_fails() {
    let endpoint = spawn_upstream(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":{"message":"boom"}}"#,
    )
    .await;
    let app = build_router(test_state(&endpoint, 16));

    let response = app
        .oneshot(ask_request(
            r#"{"name":"Tom Hanks","question":"What is his most famous role?"}"#,
        ))
        .await
        .unwrap();

    // The QA contract still answers 200 with the fallback sentence.
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["answer"], FALLBACK_ANSWER);
}

#[tokio::test]
async fn ask_rejects_blank_inputs() {
    let app = build_router(test_state("http://127.0.0.1:1", 16));

    let response = app
        .oneshot(ask_request(r#"{"name":"   ","question":"who?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn ask_rejects_malformed_json() {
    let app = build_router(test_state("http://127.0.0.1:1", 16));

    let response = app.oneshot(ask_request(r#"{"name":}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn upload_accepts_png() {
    let app = build_router(test_state("http://127.0.0.1:1", 16));
    let payload = png_payload(128);

    let response = app
        .oneshot(multipart_request("image", "star.png", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["file_name"], "star.png");
    assert_eq!(body["content_type"], "image/png");
    assert_eq!(body["size_bytes"], 128);
}

#[tokio::test]
async fn upload_rejects_non_image() {
    let app = build_router(test_state("http://127.0.0.1:1", 16));

    let response = app
        .oneshot(multipart_request("image", "note.txt", b"just some text"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn upload_rejects_missing_image_field() {
    let app = build_router(test_state("http://127.0.0.1:1", 16));

    let response = app
        .oneshot(multipart_request("document", "star.png", &png_payload(64)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_upload_answers_413_with_friendly_message() {
    // 1 MB cap, 2 MB payload.
    let app = build_router(test_state("http://127.0.0.1:1", 1));
    let payload = png_payload(2 * 1024 * 1024);

    let response = app
        .oneshot(multipart_request("image", "huge.png", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = json_body(response).await;
    assert_eq!(body["error"], "UPLOAD_TOO_LARGE");
    assert_eq!(
        body["message"],
        "Uploaded file is too large. Please upload an image under 1 MB."
    );
}

#[tokio::test]
async fn unknown_route_answers_404() {
    let app = build_router(test_state("http://127.0.0.1:1", 16));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn index_serves_upload_page() {
    let app = build_router(test_state("http://127.0.0.1:1", 16));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("enctype=\"multipart/form-data\""));
}

#[tokio::test]
async fn health_reports_backend_status() {
    let endpoint = spawn_upstream(StatusCode::OK, CHAT_OK_BODY).await;
    let app = build_router(test_state(&endpoint, 16));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["provider"], "Groq");
}
