#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use dinodex_api::auth::TokenService;
use dinodex_api::database::{connect_in_memory, schema};
use dinodex_api::{app, AppState};

pub const SECRET: &str = "test-secret";
pub const PASSWORD: &str = "correct-horse";

/// Application over a fresh, migrated in-memory database.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let pool = connect_in_memory().await.context("in-memory database")?;
        schema::migrate(&pool).await.context("migrate")?;
        let tokens = TokenService::new(SECRET).context("token service")?;
        let state = AppState::new(pool, tokens);

        Ok(Self {
            router: app(state.clone()),
            state,
        })
    }

    pub async fn send(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        send(&self.router, request).await
    }

    /// Create a user through the API and return its id.
    pub async fn signup(&self, email: &str) -> Result<i64> {
        let body = serde_json::json!({ "name": "Ada", "email": email, "password": PASSWORD });
        let (status, json) = self.send(json_request(Method::POST, "/users", None, &body)).await?;
        anyhow::ensure!(status == StatusCode::OK, "signup failed: {status} {json}");
        json["id"].as_i64().context("signup response has no id")
    }

    /// Sign in through the API and return the session token.
    pub async fn signin(&self, email: &str, password: &str) -> Result<String> {
        let body = serde_json::json!({ "email": email, "password": password });
        let (status, json) = self.send(json_request(Method::POST, "/signin", None, &body)).await?;
        anyhow::ensure!(status == StatusCode::OK, "signin failed: {status} {json}");
        json["token"].as_str().map(str::to_owned).context("signin response has no token")
    }

    /// Fresh user plus a token for it.
    pub async fn session(&self) -> Result<String> {
        self.signup("ada@example.com").await?;
        self.signin("ada@example.com", PASSWORD).await
    }
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    builder.body(Body::empty()).unwrap()
}

/// Drive one request through `router`; the body is `Null` when empty.
pub async fn send(router: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let (status, bytes) = send_raw(router, request).await?;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).context("response body is not JSON")?
    };
    Ok((status, json))
}

pub async fn send_raw(router: &Router, request: Request<Body>) -> Result<(StatusCode, Vec<u8>)> {
    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, bytes.to_vec()))
}
