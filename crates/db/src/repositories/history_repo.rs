//! Repository for the append-only `workflow_history` table.
//!
//! There are no update or delete methods here on purpose.

use oia_core::types::DbId;
use oia_core::workflow::EntityType;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::history::HistoryRecord;
use crate::repositories::workflow_repo::HistoryInsert;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, entity_type, entity_id, from_status, to_status, action, actor_id, \
                       comment, created_at";

/// Append-only access to workflow history.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Append a history row inside an open transaction.
    ///
    /// Called exclusively by the workflow repository so the row commits or
    /// rolls back together with the status change it records.
    pub(crate) async fn append(
        tx: &mut Transaction<'_, Postgres>,
        insert: HistoryInsert<'_>,
    ) -> Result<HistoryRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO workflow_history \
             (id, entity_type, entity_id, from_status, to_status, action, actor_id, comment) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoryRecord>(&query)
            .bind(insert.id)
            .bind(insert.entity_type)
            .bind(insert.entity_id)
            .bind(insert.from_status)
            .bind(insert.to_status)
            .bind(insert.action)
            .bind(insert.actor_id)
            .bind(insert.comment)
            .fetch_one(&mut **tx)
            .await
    }

    /// List all history rows for an entity, oldest first.
    pub async fn list_for_entity(
        pool: &PgPool,
        entity_type: EntityType,
        entity_id: DbId,
    ) -> Result<Vec<HistoryRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workflow_history \
             WHERE entity_type = $1 AND entity_id = $2 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, HistoryRecord>(&query)
            .bind(entity_type.as_str())
            .bind(entity_id)
            .fetch_all(pool)
            .await
    }

    /// Count history rows for an entity.
    pub async fn count_for_entity(
        pool: &PgPool,
        entity_type: EntityType,
        entity_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM workflow_history WHERE entity_type = $1 AND entity_id = $2",
        )
        .bind(entity_type.as_str())
        .bind(entity_id)
        .fetch_one(pool)
        .await
    }
}
