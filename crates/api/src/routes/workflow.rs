//! Workflow action routes shared by every document collection.
//!
//! All six document types expose the same eight action endpoints; the only
//! thing that differs per collection is the [`EntityType`] baked into the
//! handler. Building the routes from [`Action::ALL`] keeps the route table
//! and the action vocabulary from drifting apart.

use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};

use oia_core::types::DbId;
use oia_core::workflow::{Action, EntityType};

use crate::handlers::documents::{self, ActionRequest};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Build `POST /{id}/<action>` routes for one document collection.
///
/// Action names use hyphens in URLs (`start_review` -> `/start-review`).
/// The body is optional: reason-free actions may be posted without one, and
/// the guard still returns 422 where a reason was required.
pub fn action_routes(entity_type: EntityType) -> Router<AppState> {
    Action::ALL.iter().fold(Router::new(), |router, &action| {
        let path = format!("/{{id}}/{}", action.as_str().replace('_', "-"));
        router.route(
            &path,
            post(
                move |State(state): State<AppState>,
                      user: AuthUser,
                      Path(id): Path<DbId>,
                      body: Option<Json<ActionRequest>>| async move {
                    let body = body.map(|Json(body)| body).unwrap_or_default();
                    documents::perform_action(state, entity_type, action, user, id, body).await
                },
            ),
        )
    })
}
