//! Handlers for the `/visa-applications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use oia_core::error::CoreError;
use oia_core::pagination::Page;
use oia_core::types::DbId;
use oia_core::workflow::EntityType;
use oia_db::models::history::HistoryRecord;
use oia_db::models::visa::{CreateVisaApplication, UpdateVisaApplication, VisaApplication};
use oia_db::repositories::VisaApplicationRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::handlers::documents;
use crate::middleware::auth::AuthUser;
use crate::query::DocumentListQuery;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: EntityType = EntityType::VisaApplication;

/// POST /api/v1/visa-applications
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateVisaApplication>,
) -> AppResult<(StatusCode, Json<DataResponse<VisaApplication>>)> {
    validate_input(&input)?;
    let row = VisaApplicationRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// GET /api/v1/visa-applications
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<DocumentListQuery>,
) -> AppResult<Json<DataResponse<Page<VisaApplication>>>> {
    let page =
        VisaApplicationRepo::list(&state.pool, &query.filter(), &query.page_params()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/visa-applications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<VisaApplication>>> {
    let row = VisaApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY.display_name(),
            id,
        }))?;
    Ok(Json(DataResponse { data: row }))
}

/// PUT /api/v1/visa-applications/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVisaApplication>,
) -> AppResult<Json<DataResponse<VisaApplication>>> {
    validate_input(&input)?;
    documents::ensure_editable(&state, ENTITY, id, &user).await?;

    let row = VisaApplicationRepo::update_payload(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY.display_name(),
            id,
        }))?;
    Ok(Json(DataResponse { data: row }))
}

/// GET /api/v1/visa-applications/{id}/history
pub async fn history(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<HistoryRecord>>>> {
    documents::history(&state, ENTITY, id).await
}
