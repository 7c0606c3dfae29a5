//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use chat_api::config::{DatabaseSettings, JwtSettings, ServerSettings, Settings};
use chat_api::presentation::http::create_router;
use chat_api::startup::AppState;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-that-is-long-enough";

/// Test application backed by a private in-memory database
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with a fresh schema
    pub async fn new() -> Self {
        let state = AppState::initialize(test_settings())
            .await
            .expect("failed to initialise test state");

        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    fn request(method: &str, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(Self::request("GET", uri, None).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.send(
            Self::request("POST", uri, None)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a POST request whose body carries no content type
    pub async fn post_raw(&self, uri: &str, body: &str) -> Response {
        self.send(
            Self::request("POST", uri, None)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> Response {
        self.send(
            Self::request("PUT", uri, None)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a PUT request whose body carries no content type
    pub async fn put_raw(&self, uri: &str, body: &str) -> Response {
        self.send(
            Self::request("PUT", uri, None)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> Response {
        self.send(Self::request("DELETE", uri, None).body(Body::empty()).unwrap())
            .await
    }

    /// Make an authenticated GET request
    pub async fn get_auth(&self, uri: &str, token: &str) -> Response {
        self.send(
            Self::request("GET", uri, Some(token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post_json_auth(&self, uri: &str, body: &str, token: &str) -> Response {
        self.send(
            Self::request("POST", uri, Some(token))
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make an authenticated PUT request with JSON body
    pub async fn put_json_auth(&self, uri: &str, body: &str, token: &str) -> Response {
        self.send(
            Self::request("PUT", uri, Some(token))
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make an authenticated DELETE request
    pub async fn delete_auth(&self, uri: &str, token: &str) -> Response {
        self.send(
            Self::request("DELETE", uri, Some(token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Register a user and return `(user_id, access_token)`
    pub async fn register(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .post_json(
                "/api/v1/users/register",
                &serde_json::json!({ "email": email, "password": password }).to_string(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        (
            body["user"]["id"].as_str().unwrap().to_string(),
            body["access_token"].as_str().unwrap().to_string(),
        )
    }

    /// Register a throwaway user and return its token
    pub async fn token(&self) -> String {
        self.register(&unique_email(), TEST_USER.password).await.1
    }
}

/// Settings pointing at an in-memory database
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".into(),
            // A single connection keeps every query on the same in-memory database.
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: 5,
        },
        jwt: JwtSettings {
            secret: TEST_JWT_SECRET.into(),
            access_token_expiry_minutes: 15,
        },
        environment: "test".into(),
    }
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Test user credentials for auth tests
pub struct TestUser {
    pub email: &'static str,
    pub password: &'static str,
}

pub const TEST_USER: TestUser = TestUser {
    email: "test@example.com",
    password: "TestPassword123!",
};

/// Generate a unique test email
pub fn unique_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4())
}
