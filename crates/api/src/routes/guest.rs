//! Route definitions for the `/guests` resource.

use axum::routing::get;
use axum::Router;

use oia_core::workflow::EntityType;

use crate::handlers::guest;
use crate::routes::workflow;
use crate::state::AppState;

/// Routes mounted at `/guests`. Same shape as `/mous`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(guest::list).post(guest::create))
        .route("/{id}", get(guest::get_by_id).put(guest::update))
        .route("/{id}/history", get(guest::history))
        .merge(workflow::action_routes(EntityType::Guest))
}
