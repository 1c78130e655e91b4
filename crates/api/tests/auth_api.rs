//! HTTP-level integration tests for authentication: login, lockout,
//! refresh rotation, logout, and `/auth/me`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, TEST_PASSWORD};
use oia_core::roles::ROLE_USER;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_tokens_and_user(pool: PgPool) {
    let user_id = common::seed_user(&pool, "mkowalski", &[ROLE_USER]).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        None,
        serde_json::json!({"username": "mkowalski", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["id"], user_id.to_string());
    assert_eq!(json["user"]["roles"], serde_json::json!([ROLE_USER]));

    // The issued access token works against a protected endpoint.
    let token = json["access_token"].as_str().unwrap();
    let response = get(app, "/api/v1/auth/me", Some(token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let me = body_json(response).await;
    assert_eq!(me["username"], "mkowalski");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_is_401(pool: PgPool) {
    common::seed_user(&pool, "mkowalski", &[ROLE_USER]).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({"username": "mkowalski", "password": "not-the-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_unknown_username_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({"username": "ghost", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn five_failures_lock_the_account(pool: PgPool) {
    common::seed_user(&pool, "mkowalski", &[ROLE_USER]).await;
    let app = common::build_test_app(pool);

    for _ in 0..5 {
        let response = post_json(
            app.clone(),
            "/api/v1/auth/login",
            None,
            serde_json::json!({"username": "mkowalski", "password": "not-the-password"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the correct password is refused while the lock holds.
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({"username": "mkowalski", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_rotates_the_token(pool: PgPool) {
    common::seed_user(&pool, "mkowalski", &[ROLE_USER]).await;
    let app = common::build_test_app(pool);

    let login = body_json(
        post_json(
            app.clone(),
            "/api/v1/auth/login",
            None,
            serde_json::json!({"username": "mkowalski", "password": TEST_PASSWORD}),
        )
        .await,
    )
    .await;
    let refresh_token = login["refresh_token"].as_str().unwrap();

    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        None,
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert_ne!(refreshed["refresh_token"], login["refresh_token"]);

    // The consumed token is revoked and cannot be replayed.
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        None,
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_refresh_tokens(pool: PgPool) {
    common::seed_user(&pool, "mkowalski", &[ROLE_USER]).await;
    let app = common::build_test_app(pool);

    let login = body_json(
        post_json(
            app.clone(),
            "/api/v1/auth/login",
            None,
            serde_json::json!({"username": "mkowalski", "password": TEST_PASSWORD}),
        )
        .await,
    )
    .await;
    let access_token = login["access_token"].as_str().unwrap();
    let refresh_token = login["refresh_token"].as_str().unwrap();

    let response = post_json(
        app.clone(),
        "/api/v1/auth/logout",
        Some(access_token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        None,
        serde_json::json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_without_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_with_garbage_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me", Some("not-a-jwt")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
