//! Test harness driving the axum router in-process.
//!
//! No socket is opened: requests go through `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use grandpy_core::kernel::TestDependencies;
use grandpy_core::server::build_app;
use tower::ServiceExt;

pub const TEST_MAPS_KEY: &str = "test-maps-key";

pub struct TestHarness {
    /// Mocks stay reachable to assert on recorded calls
    pub deps: TestDependencies,
    app: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

impl TestHarness {
    pub fn new(deps: TestDependencies) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let app = build_app(deps.server_deps(), TEST_MAPS_KEY.to_string());
        Self { deps, app }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// POST a raw form-encoded body to /question
    pub async fn post_form(&self, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri("/question")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    pub async fn ask(&self, question: &str) -> TestResponse {
        self.post_form(&format!("question={}", urlencoding::encode(question)))
            .await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            content_type,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
