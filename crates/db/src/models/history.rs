//! Workflow history models.
//!
//! History rows are the audit trail of record: append-only, immutable, and
//! written in the same transaction as the status change they describe.
//! There is deliberately no update DTO and no `updated_at` column.

use oia_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `workflow_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryRecord {
    pub id: DbId,
    pub entity_type: String,
    pub entity_id: DbId,
    pub from_status: String,
    pub to_status: String,
    pub action: String,
    pub actor_id: DbId,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}
