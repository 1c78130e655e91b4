//! Handlers for the `/notifications` resource.
//!
//! Notifications are scoped to the authenticated user; there is no way to
//! read or acknowledge another user's feed.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use oia_core::error::CoreError;
use oia_core::pagination::Page;
use oia_core::types::DbId;
use oia_db::models::notification::Notification;
use oia_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::NotificationListQuery;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReadAllResponse {
    pub updated: u64,
}

/// GET /api/v1/notifications
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<NotificationListQuery>,
) -> AppResult<Json<DataResponse<Page<Notification>>>> {
    let page = NotificationRepo::list_for_user(
        &state.pool,
        user.user_id,
        query.unread_only,
        &query.page_params(),
    )
    .await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /api/v1/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let updated = NotificationRepo::mark_read(&state.pool, id, user.user_id).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notifications/read-all
pub async fn read_all(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<ReadAllResponse>>> {
    let updated = NotificationRepo::mark_all_read(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse {
        data: ReadAllResponse { updated },
    }))
}
