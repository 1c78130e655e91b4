//! Route definitions for the `/translation-certificates` resource.

use axum::routing::get;
use axum::Router;

use oia_core::workflow::EntityType;

use crate::handlers::translation_certificate;
use crate::routes::workflow;
use crate::state::AppState;

/// Routes mounted at `/translation-certificates`. Same shape as `/mous`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(translation_certificate::list).post(translation_certificate::create),
        )
        .route(
            "/{id}",
            get(translation_certificate::get_by_id).put(translation_certificate::update),
        )
        .route("/{id}/history", get(translation_certificate::history))
        .merge(workflow::action_routes(EntityType::TranslationCertificate))
}
