//! HTTP-level integration tests for the shared workflow action endpoints:
//! role gating, transition validity, reason requirements, and history.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, post_json, token_for};
use oia_core::roles::{ROLE_MANAGER, ROLE_SPECIALIST, ROLE_USER, ROLE_VIEWER};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a draft translation request via the API and return its id.
async fn create_request(app: Router, token: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/translation-requests",
        Some(token),
        serde_json::json!({
            "title": "Transcript translation",
            "source_language": "de",
            "target_language": "en"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn full_approval_path_records_history(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let specialist = common::seed_user(&pool, "spec", &[ROLE_SPECIALIST]).await;
    let manager = common::seed_user(&pool, "boss", &[ROLE_MANAGER]).await;
    let owner_token = token_for(owner, &[ROLE_USER]);
    let specialist_token = token_for(specialist, &[ROLE_SPECIALIST]);
    let manager_token = token_for(manager, &[ROLE_MANAGER]);
    let app = common::build_test_app(pool);

    let id = create_request(app.clone(), &owner_token).await;
    let base = format!("/api/v1/translation-requests/{id}");

    let steps = [
        ("submit", &owner_token),
        ("start-review", &specialist_token),
        ("forward", &specialist_token),
        ("approve", &manager_token),
    ];
    for (action, token) in steps {
        let response = post_json(
            app.clone(),
            &format!("{base}/{action}"),
            Some(token),
            serde_json::json!({}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "action {action}");
    }

    let document = body_json(get(app.clone(), &base, Some(&owner_token)).await).await;
    assert_eq!(document["data"]["status"], "approved");
    assert_eq!(document["data"]["approved_by"], manager.to_string());
    assert_eq!(document["data"]["reviewed_by"], specialist.to_string());

    // History is append-only, oldest first, one row per action.
    let history = body_json(get(app, &format!("{base}/history"), Some(&owner_token)).await).await;
    let rows = history["data"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["from_status"], "draft");
    assert_eq!(rows[0]["to_status"], "submitted");
    assert_eq!(rows[3]["from_status"], "pending_manager_approval");
    assert_eq!(rows[3]["to_status"], "approved");
    assert_eq!(rows[3]["actor_id"], manager.to_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reject_without_reason_is_422(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let manager = common::seed_user(&pool, "boss", &[ROLE_MANAGER]).await;
    let owner_token = token_for(owner, &[ROLE_USER]);
    let manager_token = token_for(manager, &[ROLE_MANAGER]);
    let app = common::build_test_app(pool);

    let id = create_request(app.clone(), &owner_token).await;
    let base = format!("/api/v1/translation-requests/{id}");

    post_json(app.clone(), &format!("{base}/submit"), Some(&owner_token), serde_json::json!({}))
        .await;
    post_json(
        app.clone(),
        &format!("{base}/start-review"),
        Some(&manager_token),
        serde_json::json!({}),
    )
    .await;

    // No reason at all.
    let response = post_json(
        app.clone(),
        &format!("{base}/reject"),
        Some(&manager_token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MISSING_REASON");

    // Whitespace-only is treated the same as absent.
    let response = post_json(
        app.clone(),
        &format!("{base}/reject"),
        Some(&manager_token),
        serde_json::json!({"reason": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // With a reason the rejection lands and the reason is recorded.
    let response = post_json(
        app.clone(),
        &format!("{base}/reject"),
        Some(&manager_token),
        serde_json::json!({"reason": "Source document is illegible"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let document = body_json(get(app, &base, Some(&owner_token)).await).await;
    assert_eq!(document["data"]["status"], "rejected");
    assert_eq!(
        document["data"]["rejection_reason"],
        "Source document is illegible"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn viewer_cannot_perform_actions(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let viewer = common::seed_user(&pool, "watcher", &[ROLE_VIEWER]).await;
    let owner_token = token_for(owner, &[ROLE_USER]);
    let viewer_token = token_for(viewer, &[ROLE_VIEWER]);
    let app = common::build_test_app(pool);

    let id = create_request(app.clone(), &owner_token).await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/translation-requests/{id}/submit"),
        Some(&viewer_token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    // The denial names the permission the role set lacks.
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("translation_request.submit"),
        "403 body should name the missing permission: {json}"
    );

    // Reading is still allowed.
    let response = get(
        app,
        &format!("/api/v1/translation-requests/{id}"),
        Some(&viewer_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn user_cannot_approve(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let manager = common::seed_user(&pool, "boss", &[ROLE_MANAGER]).await;
    let owner_token = token_for(owner, &[ROLE_USER]);
    let manager_token = token_for(manager, &[ROLE_MANAGER]);
    let app = common::build_test_app(pool);

    let id = create_request(app.clone(), &owner_token).await;
    let base = format!("/api/v1/translation-requests/{id}");

    post_json(app.clone(), &format!("{base}/submit"), Some(&owner_token), serde_json::json!({}))
        .await;
    post_json(
        app.clone(),
        &format!("{base}/start-review"),
        Some(&manager_token),
        serde_json::json!({}),
    )
    .await;

    let response = post_json(
        app,
        &format!("{base}/approve"),
        Some(&owner_token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn approving_twice_is_409(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let manager = common::seed_user(&pool, "boss", &[ROLE_MANAGER]).await;
    let owner_token = token_for(owner, &[ROLE_USER]);
    let manager_token = token_for(manager, &[ROLE_MANAGER]);
    let app = common::build_test_app(pool);

    let id = create_request(app.clone(), &owner_token).await;
    let base = format!("/api/v1/translation-requests/{id}");

    for action in ["submit", "start-review", "approve"] {
        let token = if action == "submit" { &owner_token } else { &manager_token };
        let response =
            post_json(app.clone(), &format!("{base}/{action}"), Some(token), serde_json::json!({}))
                .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = post_json(
        app,
        &format!("{base}/approve"),
        Some(&manager_token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_TRANSITION");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn revision_cycle_resubmits(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let specialist = common::seed_user(&pool, "spec", &[ROLE_SPECIALIST]).await;
    let owner_token = token_for(owner, &[ROLE_USER]);
    let specialist_token = token_for(specialist, &[ROLE_SPECIALIST]);
    let app = common::build_test_app(pool);

    let id = create_request(app.clone(), &owner_token).await;
    let base = format!("/api/v1/translation-requests/{id}");

    post_json(app.clone(), &format!("{base}/submit"), Some(&owner_token), serde_json::json!({}))
        .await;
    post_json(
        app.clone(),
        &format!("{base}/start-review"),
        Some(&specialist_token),
        serde_json::json!({}),
    )
    .await;
    post_json(
        app.clone(),
        &format!("{base}/request-revision"),
        Some(&specialist_token),
        serde_json::json!({"reason": "Page count missing"}),
    )
    .await;

    // The document is editable again while pending revision.
    let response = common::put_json(
        app.clone(),
        &base,
        Some(&owner_token),
        serde_json::json!({"page_count": 12}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        app.clone(),
        &format!("{base}/submit"),
        Some(&owner_token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let document = body_json(get(app, &base, Some(&owner_token)).await).await;
    assert_eq!(document["data"]["status"], "submitted");
    assert_eq!(document["data"]["revision_count"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn actions_accept_a_bodiless_post(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let specialist = common::seed_user(&pool, "spec", &[ROLE_SPECIALIST]).await;
    let owner_token = token_for(owner, &[ROLE_USER]);
    let specialist_token = token_for(specialist, &[ROLE_SPECIALIST]);
    let app = common::build_test_app(pool);

    let id = create_request(app.clone(), &owner_token).await;
    let base = format!("/api/v1/translation-requests/{id}");

    // Reason-free actions need no body at all, not even `{}`.
    let response = common::post_empty(app.clone(), &format!("{base}/submit"), Some(&owner_token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response =
        common::post_empty(app.clone(), &format!("{base}/start-review"), Some(&specialist_token))
            .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The reason requirement still applies without a body.
    let response =
        common::post_empty(app.clone(), &format!("{base}/reject"), Some(&specialist_token)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let document = body_json(get(app, &base, Some(&owner_token)).await).await;
    assert_eq!(document["data"]["status"], "under_review");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn action_on_missing_document_is_404(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(owner, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        &format!("/api/v1/mous/{}/submit", Uuid::now_v7()),
        Some(&token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
