use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chatter::router::init_router;
use chatter::state::AppState;
use chatter_config::CorsConfig;
use chatter_db::MemoryCredentialStore;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryCredentialStore>,
}

pub fn setup_test_app() -> TestApp {
    let store = Arc::new(MemoryCredentialStore::new());
    let state = AppState::new(
        store.clone(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    );

    TestApp {
        router: init_router(state),
        store,
    }
}

impl TestApp {
    pub async fn post(&self, uri: &str, body: &str) -> (StatusCode, String) {
        send(self.router.clone(), uri, body).await
    }

    pub async fn register(&self, body: &str) -> (StatusCode, String) {
        self.post("/api/v1/register", body).await
    }

    pub async fn login(&self, body: &str) -> (StatusCode, String) {
        self.post("/api/v1/login", body).await
    }
}

/// POSTs a raw body with no `Content-Type` header.
pub async fn send(router: Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub fn credentials(username: &str, password: &str) -> String {
    serde_json::json!({ "username": username, "password": password }).to_string()
}

pub fn generate_unique_username() -> String {
    format!("user-{}", Uuid::new_v4())
}
