//! Shared handler logic for document entities.
//!
//! Every document type (MOU, visa application, visa extension, guest,
//! translation request, translation certificate) exposes the same workflow
//! action endpoints and history view; the per-entity handler modules only
//! own payload CRUD. The flow for an action is: read the current status,
//! plan the transition (pure guard), apply it atomically, then publish the
//! committed transition on the event bus.

use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use oia_core::error::CoreError;
use oia_core::status::is_editable;
use oia_core::types::DbId;
use oia_core::workflow::{plan_transition, Action, Actor, EntityType};
use oia_db::models::history::HistoryRecord;
use oia_db::repositories::{HistoryRepo, WorkflowRepo};
use oia_events::WorkflowEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for all workflow action endpoints.
///
/// `reason` is mandatory for `reject` and `request-revision`; the guard
/// returns 422 when it is absent or blank.
#[derive(Debug, Default, Deserialize)]
pub struct ActionRequest {
    pub reason: Option<String>,
}

/// Perform a workflow action on a document and return the history row it
/// produced.
pub async fn perform_action(
    state: AppState,
    entity_type: EntityType,
    action: Action,
    user: AuthUser,
    id: DbId,
    body: ActionRequest,
) -> AppResult<Json<DataResponse<HistoryRecord>>> {
    let current = WorkflowRepo::current_status(&state.pool, entity_type, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: entity_type.display_name(),
            id,
        }))?;

    let actor = Actor {
        user_id: user.user_id,
        roles: user.roles,
    };
    let plan = plan_transition(entity_type, &current, action, &actor, body.reason.as_deref())?;
    let record = WorkflowRepo::apply(&state.pool, id, &plan).await?;

    tracing::info!(
        entity = entity_type.as_str(),
        entity_id = %id,
        action = action.as_str(),
        from = %record.from_status,
        to = %record.to_status,
        "Workflow transition applied"
    );

    state.event_bus.publish(WorkflowEvent {
        entity_type,
        entity_id: id,
        action,
        from_status: record.from_status.clone(),
        to_status: record.to_status.clone(),
        actor_user_id: actor.user_id,
        comment: record.comment.clone(),
        timestamp: Utc::now(),
    });

    Ok(Json(DataResponse { data: record }))
}

/// List the full transition history of a document, oldest first.
pub async fn history(
    state: &AppState,
    entity_type: EntityType,
    id: DbId,
) -> AppResult<Json<DataResponse<Vec<HistoryRecord>>>> {
    // A document with zero history still exists; distinguish that from 404.
    WorkflowRepo::current_status(&state.pool, entity_type, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: entity_type.display_name(),
            id,
        }))?;

    let records = HistoryRepo::list_for_entity(&state.pool, entity_type, id).await?;
    Ok(Json(DataResponse { data: records }))
}

/// Guard a payload update: the document must exist, be in an editable
/// status, and belong to the caller (admins may edit any document).
pub async fn ensure_editable(
    state: &AppState,
    entity_type: EntityType,
    id: DbId,
    user: &AuthUser,
) -> AppResult<()> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: entity_type.display_name(),
            id,
        })
    };

    let status = WorkflowRepo::current_status(&state.pool, entity_type, id)
        .await?
        .ok_or_else(not_found)?;

    if !is_editable(&status) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "{} in status '{status}' cannot be edited",
            entity_type.display_name()
        ))));
    }

    let owner = WorkflowRepo::owner_of(&state.pool, entity_type, id)
        .await?
        .ok_or_else(not_found)?;

    if owner != user.user_id && !user.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner or an admin may edit this document".into(),
        )));
    }

    Ok(())
}
