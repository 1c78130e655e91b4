pub mod admin;
pub mod auth;
pub mod guest;
pub mod health;
pub mod mou;
pub mod notification;
pub mod reports;
pub mod translation_certificate;
pub mod translation_request;
pub mod visa_application;
pub mod visa_extension;
pub mod workflow;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current user (requires auth)
///
/// /admin/users                                     list, create (admin only)
/// /admin/users/{id}                                get, update, deactivate
/// /admin/users/{id}/roles                          replace role set (PUT)
///
/// /mous                                            list, create draft
/// /mous/{id}                                       get, update (editable only)
/// /mous/{id}/history                               transition history
/// /mous/{id}/submit | start-review | request-revision | forward
///           | approve | reject | complete | cancel  workflow actions (POST)
///
/// /visa-applications, /visa-extensions, /guests,
/// /translation-requests, /translation-certificates  same shape as /mous
///
/// /notifications                                   list (?unread_only, page, limit)
/// /notifications/read-all                          mark all read (POST)
/// /notifications/{id}/read                         mark read (POST)
///
/// /reports/status-summary                          per-type, per-status counts
/// /reports/monthly                                 monthly created/approved counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout, me).
        .nest("/auth", auth::router())
        // Admin routes (user and role management).
        .nest("/admin", admin::router())
        // Document collections, each with the shared workflow action set.
        .nest("/mous", mou::router())
        .nest("/visa-applications", visa_application::router())
        .nest("/visa-extensions", visa_extension::router())
        .nest("/guests", guest::router())
        .nest("/translation-requests", translation_request::router())
        .nest("/translation-certificates", translation_certificate::router())
        // Per-user notification feed.
        .nest("/notifications", notification::router())
        // Aggregate reporting.
        .nest("/reports", reports::router())
}
