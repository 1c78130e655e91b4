//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /status-summary -> status_summary
/// GET /monthly        -> monthly (?from, ?to)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status-summary", get(reports::status_summary))
        .route("/monthly", get(reports::monthly))
}
