//! Handlers for the `/visa-extensions` resource.
//!
//! An extension references an existing visa application; the reference is
//! validated here so a dangling id fails with 400 rather than a raw foreign
//! key violation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use oia_core::error::CoreError;
use oia_core::pagination::Page;
use oia_core::types::DbId;
use oia_core::workflow::EntityType;
use oia_db::models::history::HistoryRecord;
use oia_db::models::visa::{CreateVisaExtension, UpdateVisaExtension, VisaExtension};
use oia_db::repositories::{VisaApplicationRepo, VisaExtensionRepo};

use crate::error::{validate_input, AppError, AppResult};
use crate::handlers::documents;
use crate::middleware::auth::AuthUser;
use crate::query::DocumentListQuery;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: EntityType = EntityType::VisaExtension;

/// POST /api/v1/visa-extensions
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateVisaExtension>,
) -> AppResult<(StatusCode, Json<DataResponse<VisaExtension>>)> {
    validate_input(&input)?;

    if VisaApplicationRepo::find_by_id(&state.pool, input.visa_application_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Visa application {} does not exist",
            input.visa_application_id
        ))));
    }

    let row = VisaExtensionRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// GET /api/v1/visa-extensions
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<DocumentListQuery>,
) -> AppResult<Json<DataResponse<Page<VisaExtension>>>> {
    let page = VisaExtensionRepo::list(&state.pool, &query.filter(), &query.page_params()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/visa-extensions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<VisaExtension>>> {
    let row = VisaExtensionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY.display_name(),
            id,
        }))?;
    Ok(Json(DataResponse { data: row }))
}

/// PUT /api/v1/visa-extensions/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVisaExtension>,
) -> AppResult<Json<DataResponse<VisaExtension>>> {
    validate_input(&input)?;
    documents::ensure_editable(&state, ENTITY, id, &user).await?;

    let row = VisaExtensionRepo::update_payload(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY.display_name(),
            id,
        }))?;
    Ok(Json(DataResponse { data: row }))
}

/// GET /api/v1/visa-extensions/{id}/history
pub async fn history(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<HistoryRecord>>>> {
    documents::history(&state, ENTITY, id).await
}
