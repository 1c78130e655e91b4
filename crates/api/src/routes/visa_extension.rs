//! Route definitions for the `/visa-extensions` resource.

use axum::routing::get;
use axum::Router;

use oia_core::workflow::EntityType;

use crate::handlers::visa_extension;
use crate::routes::workflow;
use crate::state::AppState;

/// Routes mounted at `/visa-extensions`. Same shape as `/mous`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(visa_extension::list).post(visa_extension::create))
        .route(
            "/{id}",
            get(visa_extension::get_by_id).put(visa_extension::update),
        )
        .route("/{id}/history", get(visa_extension::history))
        .merge(workflow::action_routes(EntityType::VisaExtension))
}
