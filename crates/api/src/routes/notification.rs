//! Route definitions for the `/notifications` resource.
//!
//! All endpoints require authentication and only touch the caller's feed.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET  /           -> list (?unread_only, page, limit)
/// POST /read-all   -> read_all
/// POST /{id}/read  -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list))
        .route("/read-all", post(notification::read_all))
        .route("/{id}/read", post(notification::mark_read))
}
