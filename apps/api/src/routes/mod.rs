pub mod catalog;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(catalog::index_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/styles", get(catalog::styles_handler))
        .route("/api/sample-resume", get(catalog::sample_resume_handler))
        // Generation API
        .route(
            "/api/generate/resume",
            post(handlers::handle_generate_resume),
        )
        .route(
            "/api/generate/resume-tailored",
            post(handlers::handle_generate_tailored),
        )
        .route(
            "/api/generate/cover-letter",
            post(handlers::handle_generate_cover_letter),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::stub::StubCompletion;

    const MINIMAL_YAML: &str =
        "personal_information: {name: \"A\", surname: \"B\", email: \"a@b.com\"}";

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn app_with(stub: &Arc<StubCompletion>) -> Router {
        build_router(AppState::for_tests(stub.clone()))
    }

    #[tokio::test]
    async fn test_health() {
        let stub = Arc::new(StubCompletion::replying(""));
        let (status, body) = send(app_with(&stub), get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_styles_lists_name_and_author() {
        let stub = Arc::new(StubCompletion::replying(""));
        let (status, body) = send(app_with(&stub), get("/api/styles")).await;
        assert_eq!(status, StatusCode::OK);
        let styles = body["styles"].as_array().unwrap();
        assert_eq!(styles.len(), 3);
        assert_eq!(styles[0], json!({ "name": "Professional", "author": "AIHawk" }));
    }

    #[tokio::test]
    async fn test_sample_resume_is_served() {
        let stub = Arc::new(StubCompletion::replying(""));
        let (status, body) = send(app_with(&stub), get("/api/sample-resume")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["sample_yaml"]
            .as_str()
            .unwrap()
            .starts_with("personal_information:"));
    }

    #[tokio::test]
    async fn test_index_falls_back_to_builtin_page() {
        let stub = Arc::new(StubCompletion::replying(""));
        let mut state = AppState::for_tests(stub.clone());
        let empty = tempfile::tempdir().unwrap();
        let mut config = (*state.config).clone();
        config.static_dir = empty.path().to_path_buf();
        state.config = Arc::new(config);

        let response = build_router(state).oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("Resume Builder"));
    }

    #[tokio::test]
    async fn test_generate_resume_end_to_end() {
        let stub = Arc::new(StubCompletion::replying("<body><h1>A B</h1></body>"));
        let (status, body) = send(
            app_with(&stub),
            post_json(
                "/api/generate/resume",
                json!({ "resume_yaml": MINIMAL_YAML, "api_key": "sk-test", "style": "modern" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        let html = body["html"].as_str().unwrap();
        assert!(html.contains("<h1>A B</h1>"));
        assert!(html.contains("color: #0b7285"));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_cover_letter_without_job_description_is_400() {
        let stub = Arc::new(StubCompletion::replying("<p>hi</p>"));
        let (status, body) = send(
            app_with(&stub),
            post_json(
                "/api/generate/cover-letter",
                json!({ "resume_yaml": MINIMAL_YAML, "api_key": "sk-test" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!("MISSING_JOB_DESCRIPTION"));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_tailored_resume_with_empty_job_description_is_400() {
        let stub = Arc::new(StubCompletion::replying("<body></body>"));
        let (status, _) = send(
            app_with(&stub),
            post_json(
                "/api/generate/resume-tailored",
                json!({ "resume_yaml": MINIMAL_YAML, "api_key": "sk-test", "job_description": "" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_tailored_resume_succeeds_with_job_description() {
        let stub = Arc::new(StubCompletion::replying("<body><h1>A B</h1></body>"));
        let (status, body) = send(
            app_with(&stub),
            post_json(
                "/api/generate/resume-tailored",
                json!({
                    "resume_yaml": MINIMAL_YAML,
                    "api_key": "sk-test",
                    "job_description": "Rust backend engineer"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        let (_, _, prompt) = stub.last_call().unwrap();
        assert!(prompt.contains("Rust backend engineer"));
    }

    #[tokio::test]
    async fn test_invalid_yaml_and_missing_key_are_400() {
        let stub = Arc::new(StubCompletion::replying("<body></body>"));

        let (status, body) = send(
            app_with(&stub),
            post_json(
                "/api/generate/resume",
                json!({ "resume_yaml": "personal_information: [", "api_key": "sk-test" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!("INVALID_INPUT"));

        let (status, body) = send(
            app_with(&stub),
            post_json("/api/generate/resume", json!({ "resume_yaml": MINIMAL_YAML })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!("MISSING_API_KEY"));

        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_body_is_400() {
        let stub = Arc::new(StubCompletion::replying("<body></body>"));
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate/resume")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(app_with(&stub), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!("INVALID_INPUT"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500_with_message() {
        let stub = Arc::new(StubCompletion::failing(401));
        let (status, body) = send(
            app_with(&stub),
            post_json(
                "/api/generate/resume",
                json!({ "resume_yaml": MINIMAL_YAML, "api_key": "sk-bad" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], json!("GENERATION_ERROR"));
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("stubbed failure"));
    }
}
