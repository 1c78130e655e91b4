//! Handlers for the `/translation-certificates` resource.
//!
//! A certificate is drafted against an approved translation request; the
//! reference is checked at creation so the number sequence only covers
//! legitimate certificates. Certificate numbers are unique (409 on reuse).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use oia_core::error::CoreError;
use oia_core::pagination::Page;
use oia_core::status::STATUS_APPROVED;
use oia_core::types::DbId;
use oia_core::workflow::EntityType;
use oia_db::models::history::HistoryRecord;
use oia_db::models::translation::{
    CreateTranslationCertificate, TranslationCertificate, UpdateTranslationCertificate,
};
use oia_db::repositories::{TranslationCertificateRepo, TranslationRequestRepo};

use crate::error::{validate_input, AppError, AppResult};
use crate::handlers::documents;
use crate::middleware::auth::AuthUser;
use crate::query::DocumentListQuery;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: EntityType = EntityType::TranslationCertificate;

/// POST /api/v1/translation-certificates
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTranslationCertificate>,
) -> AppResult<(StatusCode, Json<DataResponse<TranslationCertificate>>)> {
    validate_input(&input)?;

    let request = TranslationRequestRepo::find_by_id(&state.pool, input.translation_request_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Translation request {} does not exist",
                input.translation_request_id
            )))
        })?;

    if request.status != STATUS_APPROVED {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Translation request {} is not approved (status '{}')",
            request.id, request.status
        ))));
    }

    let row = TranslationCertificateRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// GET /api/v1/translation-certificates
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<DocumentListQuery>,
) -> AppResult<Json<DataResponse<Page<TranslationCertificate>>>> {
    let page =
        TranslationCertificateRepo::list(&state.pool, &query.filter(), &query.page_params())
            .await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/translation-certificates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TranslationCertificate>>> {
    let row = TranslationCertificateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY.display_name(),
            id,
        }))?;
    Ok(Json(DataResponse { data: row }))
}

/// PUT /api/v1/translation-certificates/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTranslationCertificate>,
) -> AppResult<Json<DataResponse<TranslationCertificate>>> {
    validate_input(&input)?;
    documents::ensure_editable(&state, ENTITY, id, &user).await?;

    let row = TranslationCertificateRepo::update_payload(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY.display_name(),
            id,
        }))?;
    Ok(Json(DataResponse { data: row }))
}

/// GET /api/v1/translation-certificates/{id}/history
pub async fn history(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<HistoryRecord>>>> {
    documents::history(&state, ENTITY, id).await
}
