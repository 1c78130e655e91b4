//! Handlers for the `/mous` resource (MOU payload CRUD + history).
//!
//! Workflow actions are wired generically in the route layer via
//! [`crate::handlers::documents`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use oia_core::error::CoreError;
use oia_core::pagination::Page;
use oia_core::types::DbId;
use oia_core::workflow::EntityType;
use oia_db::models::history::HistoryRecord;
use oia_db::models::mou::{CreateMou, Mou, UpdateMou};
use oia_db::repositories::MouRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::handlers::documents;
use crate::middleware::auth::AuthUser;
use crate::query::DocumentListQuery;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: EntityType = EntityType::Mou;

/// POST /api/v1/mous -- create a draft MOU owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateMou>,
) -> AppResult<(StatusCode, Json<DataResponse<Mou>>)> {
    validate_input(&input)?;
    let mou = MouRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: mou })))
}

/// GET /api/v1/mous -- paginated, filtered list.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<DocumentListQuery>,
) -> AppResult<Json<DataResponse<Page<Mou>>>> {
    let page = MouRepo::list(&state.pool, &query.filter(), &query.page_params()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/mous/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Mou>>> {
    let mou = MouRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY.display_name(),
            id,
        }))?;
    Ok(Json(DataResponse { data: mou }))
}

/// PUT /api/v1/mous/{id} -- payload update, editable statuses only.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMou>,
) -> AppResult<Json<DataResponse<Mou>>> {
    validate_input(&input)?;
    documents::ensure_editable(&state, ENTITY, id, &user).await?;

    let mou = MouRepo::update_payload(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY.display_name(),
            id,
        }))?;
    Ok(Json(DataResponse { data: mou }))
}

/// GET /api/v1/mous/{id}/history
pub async fn history(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<HistoryRecord>>>> {
    documents::history(&state, ENTITY, id).await
}
