//! Route definitions for the `/mous` resource.

use axum::routing::get;
use axum::Router;

use oia_core::workflow::EntityType;

use crate::handlers::mou;
use crate::routes::workflow;
use crate::state::AppState;

/// Routes mounted at `/mous`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create (draft)
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update (editable statuses only)
/// GET    /{id}/history  -> history
/// POST   /{id}/<action> -> workflow actions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mou::list).post(mou::create))
        .route("/{id}", get(mou::get_by_id).put(mou::update))
        .route("/{id}/history", get(mou::history))
        .merge(workflow::action_routes(EntityType::Mou))
}
