//! Route definitions for the `/visa-applications` resource.

use axum::routing::get;
use axum::Router;

use oia_core::workflow::EntityType;

use crate::handlers::visa_application;
use crate::routes::workflow;
use crate::state::AppState;

/// Routes mounted at `/visa-applications`. Same shape as `/mous`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(visa_application::list).post(visa_application::create),
        )
        .route(
            "/{id}",
            get(visa_application::get_by_id).put(visa_application::update),
        )
        .route("/{id}/history", get(visa_application::history))
        .merge(workflow::action_routes(EntityType::VisaApplication))
}
