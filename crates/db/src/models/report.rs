//! Reporting query result rows.

use oia_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// One cell of the per-entity, per-status count matrix.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub entity_type: String,
    pub status: String,
    pub count: i64,
}

/// Created/approved counts for one calendar month across all entity types.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonthlyCount {
    /// First instant of the month (UTC).
    pub month: Timestamp,
    pub created: i64,
    pub approved: i64,
}
