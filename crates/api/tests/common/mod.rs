//! Shared helpers for HTTP-level integration tests.
//!
//! Tests send requests directly to the router via `tower::ServiceExt`,
//! without a TCP listener. Users are seeded through the repositories so
//! auth tests do not depend on the admin endpoints they exercise.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use oia_api::auth::jwt::{generate_access_token, JwtConfig};
use oia_api::auth::password::hash_password;
use oia_api::config::ServerConfig;
use oia_api::router::build_app_router;
use oia_api::state::AppState;
use oia_core::types::DbId;
use oia_db::models::user::CreateUser;
use oia_db::repositories::{RoleRepo, UserRepo};
use oia_events::EventBus;

/// Password used for every seeded test user. Long enough to pass the
/// strength check so login tests can use it verbatim.
pub const TEST_PASSWORD: &str = "correct-horse-battery-st4ple";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router plus the event bus backing it.
///
/// Tests that assert on notification fan-out need the bus to spawn a
/// `NotificationRouter` subscriber; everything else can drop it.
pub fn build_test_app_with_bus(pool: PgPool) -> (Router, Arc<EventBus>) {
    let config = test_config();
    let event_bus = Arc::new(EventBus::default());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::clone(&event_bus),
    };

    (build_app_router(state, &config), event_bus)
}

/// Build the full application router with all middleware layers.
///
/// Mirrors `main.rs` exactly (same [`build_app_router`]), so integration
/// tests exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_bus(pool).0
}

/// Seed a user with the given roles and [`TEST_PASSWORD`]. Returns the id.
pub async fn seed_user(pool: &PgPool, username: &str, roles: &[&str]) -> DbId {
    let password_hash = hash_password(TEST_PASSWORD).expect("hash password");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.edu"),
            password_hash,
            department: None,
        },
    )
    .await
    .expect("seed user");

    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    RoleRepo::set_roles_for_user(pool, user.id, &roles)
        .await
        .expect("seed roles");

    user.id
}

/// Mint an access token for a seeded user, signed with the test secret.
pub fn token_for(user_id: DbId, roles: &[&str]) -> String {
    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    generate_access_token(user_id, &roles, &test_config().jwt).expect("generate token")
}

fn with_auth(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

/// Send a GET request.
pub async fn get(app: Router, path: &str, token: Option<&str>) -> Response<Body> {
    let request = with_auth(Request::builder().method("GET").uri(path), token)
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Send a POST request with a JSON body.
pub async fn post_json(
    app: Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = with_auth(Request::builder().method("POST").uri(path), token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Send a POST request with no body and no content type.
pub async fn post_empty(app: Router, path: &str, token: Option<&str>) -> Response<Body> {
    let request = with_auth(Request::builder().method("POST").uri(path), token)
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Send a PUT request with a JSON body.
pub async fn put_json(
    app: Router,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = with_auth(Request::builder().method("PUT").uri(path), token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Send a DELETE request.
pub async fn delete(app: Router, path: &str, token: Option<&str>) -> Response<Body> {
    let request = with_auth(Request::builder().method("DELETE").uri(path), token)
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse body as JSON")
}

/// Create a draft MOU via the API and return its id.
pub async fn create_mou(app: Router, token: &str, title: &str) -> DbId {
    let response = post_json(
        app,
        "/api/v1/mous",
        Some(token),
        serde_json::json!({
            "title": title,
            "partner_name": "Leiden University",
            "partner_country": "Netherlands"
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"]
        .as_str()
        .expect("id in response")
        .parse()
        .expect("uuid id")
}
