//! Route definitions for the `/translation-requests` resource.

use axum::routing::get;
use axum::Router;

use oia_core::workflow::EntityType;

use crate::handlers::translation_request;
use crate::routes::workflow;
use crate::state::AppState;

/// Routes mounted at `/translation-requests`. Same shape as `/mous`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(translation_request::list).post(translation_request::create),
        )
        .route(
            "/{id}",
            get(translation_request::get_by_id).put(translation_request::update),
        )
        .route("/{id}/history", get(translation_request::history))
        .merge(workflow::action_routes(EntityType::TranslationRequest))
}
