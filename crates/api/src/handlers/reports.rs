//! Read-only aggregate reports across all document types.

use axum::extract::{Query, State};
use axum::Json;

use oia_core::error::CoreError;
use oia_db::models::report::{MonthlyCount, StatusCount};
use oia_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::query::MonthlyRangeQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reports/status-summary
pub async fn status_summary(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<StatusCount>>>> {
    let rows = ReportRepo::status_summary(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/reports/monthly?from=...&to=...
pub async fn monthly(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(query): Query<MonthlyRangeQuery>,
) -> AppResult<Json<DataResponse<Vec<MonthlyCount>>>> {
    if query.from > query.to {
        return Err(AppError::Core(CoreError::Validation(
            "'from' must not be after 'to'".to_string(),
        )));
    }
    let rows = ReportRepo::monthly(&state.pool, query.from, query.to).await?;
    Ok(Json(DataResponse { data: rows }))
}
