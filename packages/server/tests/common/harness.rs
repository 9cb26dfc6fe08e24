//! Test harness for integration testing.
//!
//! Builds the real router over a fresh in-memory document store, so every
//! test exercises the exact routing, guards, and response shapes the server
//! ships with. Requests are driven through `tower::ServiceExt::oneshot`;
//! no sockets, no external services.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server_core::domains::auth::JwtService;
use server_core::kernel::{
    collections, seed_demo_catalog, DocumentStore, Filter, MemoryStore, ServerDeps, Update,
};
use server_core::server::build_app;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ISSUER: &str = "doctors-portal";

/// Test harness that manages a fully wired application.
///
/// Each test gets its own store, so tests are isolated and can run in
/// parallel. The store handle is exposed for seeding fixtures directly.
pub struct TestHarness {
    router: Router,
    pub store: Arc<MemoryStore>,
}

/// Response captured from a routed request.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// Gets a value at the given JSON path.
    ///
    /// # Example
    /// ```ignore
    /// let name = response.get("booking.treatment");
    /// ```
    pub fn get(&self, path: &str) -> Value {
        let mut current = &self.body;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }
}

impl TestHarness {
    /// Creates a new harness with the demo treatment catalog seeded.
    pub async fn new() -> Self {
        // Initialize tracing subscriber to respect RUST_LOG environment variable.
        // Uses try_init() to avoid panicking if already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let store = Arc::new(MemoryStore::new());
        seed_demo_catalog(store.as_ref())
            .await
            .expect("Failed to seed treatment catalog");

        let jwt_service = Arc::new(JwtService::new(TEST_SECRET, TEST_ISSUER.to_string()));
        let backend: Arc<dyn DocumentStore> = store.clone();
        let deps = ServerDeps::new(backend, jwt_service);

        Self {
            router: build_app(deps),
            store,
        }
    }

    /// Register an account through the upsert endpoint and return its
    /// bearer token, the way a real client signs in.
    pub async fn register(&self, email: &str, name: &str) -> String {
        let response = self
            .put(&format!("/user/{email}"), None, json!({ "name": name }))
            .await;
        assert_eq!(response.status, StatusCode::OK, "upsert failed: {:?}", response.body);
        response.body["accessToken"]
            .as_str()
            .expect("upsert response carries accessToken")
            .to_string()
    }

    /// Register an account, grant it the admin role directly through the
    /// store (how an operator bootstraps the first admin), and return its
    /// bearer token.
    pub async fn register_admin(&self, email: &str, name: &str) -> String {
        let token = self.register(email, name).await;
        let mut fields = serde_json::Map::new();
        fields.insert("role".to_string(), Value::String("admin".to_string()));
        self.store
            .update_one(
                collections::USERS,
                &Filter::new().eq("email", email),
                Update::Set(fields),
                false,
            )
            .await
            .expect("Failed to grant admin role");
        token
    }

    /// Send a request and capture the response.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> ApiResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router returned an error");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        ApiResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> ApiResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> ApiResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> ApiResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> ApiResponse {
        self.request(Method::DELETE, uri, token, None).await
    }
}
