/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use playlist_core::UserId;
use playlist_server::{create_router, AppState, AuthService};
use playlist_storage::SqliteStore;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-key";

/// Router backed by a real SQLite file that is removed on drop
pub struct TestApp {
    pub router: Router,
    pub auth_service: Arc<AuthService>,
    pub store: SqliteStore,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let store = SqliteStore::connect(&db_url).await.unwrap();

        let auth_service = Arc::new(AuthService::new(TEST_JWT_SECRET.to_string(), 1));
        let app_state = AppState::new(Arc::new(store.clone()), Arc::clone(&auth_service));

        Self {
            router: create_router(app_state),
            auth_service,
            store,
            _temp_dir: temp_dir,
        }
    }

    /// Access token for the given user
    pub fn token_for(&self, user_id: &UserId) -> String {
        self.auth_service.create_access_token(user_id).unwrap()
    }

    /// Send a request and return the status with the parsed JSON body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        match body {
            Some(json) => {
                let text = serde_json::to_string(&json).unwrap();
                self.send_raw(method, uri, token, Some("application/json"), text)
                    .await
            }
            None => self.send_raw(method, uri, token, None, String::new()).await,
        }
    }

    /// Send an arbitrary body with an optional content type
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        content_type: Option<&str>,
        body: String,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let request = builder.body(Body::from(body)).unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };

        (status, json)
    }
}

/// Test fixtures
pub mod fixtures {
    pub const PLAYLIST_NAME: &str = "Late Night Coding";
    pub const PLAYLIST_DESCRIPTION: &str = "Lo-fi for long sessions";
}
