//! HTTP-level integration tests for document CRUD: creation, payload
//! updates, editability rules, cross-entity references, and list pagination.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_mou, get, post_json, put_json, token_for};
use oia_core::roles::{ROLE_ADMIN, ROLE_USER};
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_mou_starts_in_draft(pool: PgPool) {
    let user_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(user_id, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/mous",
        Some(&token),
        serde_json::json!({
            "title": "Exchange agreement",
            "partner_name": "Leiden University",
            "partner_country": "Netherlands"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "draft");
    assert_eq!(json["data"]["created_by"], user_id.to_string());
    assert_eq!(json["data"]["revision_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_title_is_rejected(pool: PgPool) {
    let user_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(user_id, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/mous",
        Some(&token),
        serde_json::json!({
            "title": "",
            "partner_name": "Leiden University",
            "partner_country": "Netherlands"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_mou_is_404(pool: PgPool) {
    let user_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(user_id, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/mous/{}", Uuid::now_v7()), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_can_edit_draft(pool: PgPool) {
    let user_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(user_id, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    let id = create_mou(app.clone(), &token, "Original title").await;

    let response = put_json(
        app,
        &format!("/api/v1/mous/{id}"),
        Some(&token),
        serde_json::json!({"title": "Revised title"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Revised title");
    // Untouched payload fields survive a partial update.
    assert_eq!(json["data"]["partner_name"], "Leiden University");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submitted_document_cannot_be_edited(pool: PgPool) {
    let user_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(user_id, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    let id = create_mou(app.clone(), &token, "Locked after submit").await;
    let response = post_json(
        app.clone(),
        &format!("/api/v1/mous/{id}/submit"),
        Some(&token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json(
        app,
        &format!("/api/v1/mous/{id}"),
        Some(&token),
        serde_json::json!({"title": "Too late"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_owner_cannot_edit_but_admin_can(pool: PgPool) {
    let owner_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let other_id = common::seed_user(&pool, "other", &[ROLE_USER]).await;
    let admin_id = common::seed_user(&pool, "root", &[ROLE_ADMIN]).await;
    let owner_token = token_for(owner_id, &[ROLE_USER]);
    let other_token = token_for(other_id, &[ROLE_USER]);
    let admin_token = token_for(admin_id, &[ROLE_ADMIN]);
    let app = common::build_test_app(pool);

    let id = create_mou(app.clone(), &owner_token, "Ownership check").await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/mous/{id}"),
        Some(&other_token),
        serde_json::json!({"title": "Hijacked"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json(
        app,
        &format!("/api/v1/mous/{id}"),
        Some(&admin_token),
        serde_json::json!({"title": "Corrected by admin"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_paginated(pool: PgPool) {
    let user_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(user_id, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    for i in 0..3 {
        create_mou(app.clone(), &token, &format!("MOU {i}")).await;
    }

    let response = get(app.clone(), "/api/v1/mous?limit=2&page=1", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["total"], 3);

    let response = get(app, "/api/v1/mous?limit=2&page=2", Some(&token)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_status(pool: PgPool) {
    let user_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(user_id, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    create_mou(app.clone(), &token, "Stays in draft").await;
    let submitted = create_mou(app.clone(), &token, "Gets submitted").await;
    post_json(
        app.clone(),
        &format!("/api/v1/mous/{submitted}/submit"),
        Some(&token),
        serde_json::json!({}),
    )
    .await;

    let response = get(app, "/api/v1/mous?status=submitted", Some(&token)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["items"][0]["id"], submitted.to_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn visa_extension_requires_existing_application(pool: PgPool) {
    let user_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(user_id, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/visa-extensions",
        Some(&token),
        serde_json::json!({
            "visa_application_id": Uuid::now_v7(),
            "current_expiry": "2026-10-01",
            "requested_until": "2027-04-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // With a real application the same payload goes through.
    let application = body_json(
        post_json(
            app.clone(),
            "/api/v1/visa-applications",
            Some(&token),
            serde_json::json!({
                "applicant_name": "Dr. Amina Diallo",
                "passport_number": "PA1234567",
                "nationality": "Senegal",
                "visa_type": "D"
            }),
        )
        .await,
    )
    .await;
    let application_id = application["data"]["id"].as_str().unwrap();

    let response = post_json(
        app,
        "/api/v1/visa-extensions",
        Some(&token),
        serde_json::json!({
            "visa_application_id": application_id,
            "current_expiry": "2026-10-01",
            "requested_until": "2027-04-01"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn certificate_requires_approved_request(pool: PgPool) {
    let user_id = common::seed_user(&pool, "owner", &[ROLE_USER]).await;
    let token = token_for(user_id, &[ROLE_USER]);
    let app = common::build_test_app(pool);

    // Unknown request id is a validation failure.
    let response = post_json(
        app.clone(),
        "/api/v1/translation-certificates",
        Some(&token),
        serde_json::json!({
            "translation_request_id": Uuid::now_v7(),
            "certificate_number": "TC-2026-001",
            "issued_to": "Jan Novak",
            "language_pair": "cs-en"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A request that is still in draft cannot back a certificate.
    let request = body_json(
        post_json(
            app.clone(),
            "/api/v1/translation-requests",
            Some(&token),
            serde_json::json!({
                "title": "Diploma translation",
                "source_language": "cs",
                "target_language": "en"
            }),
        )
        .await,
    )
    .await;
    let request_id = request["data"]["id"].as_str().unwrap();

    let response = post_json(
        app,
        "/api/v1/translation-certificates",
        Some(&token),
        serde_json::json!({
            "translation_request_id": request_id,
            "certificate_number": "TC-2026-001",
            "issued_to": "Jan Novak",
            "language_pair": "cs-en"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn documents_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/mous", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/v1/guests",
        None,
        serde_json::json!({"full_name": "Anyone", "nationality": "Unknown", "host_unit": "OIA"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
