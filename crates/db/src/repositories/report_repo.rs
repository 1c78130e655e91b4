//! Read-only reporting queries across all document tables.

use oia_core::types::Timestamp;
use oia_core::workflow::EntityType;
use sqlx::PgPool;

use crate::models::report::{MonthlyCount, StatusCount};

/// Build a UNION ALL over every document table with the given per-table
/// SELECT template. `{type}` and `{table}` are substituted per entity type.
fn union_all(template: &str) -> String {
    EntityType::ALL
        .iter()
        .map(|e| {
            template
                .replace("{type}", e.as_str())
                .replace("{table}", e.table())
        })
        .collect::<Vec<_>>()
        .join(" UNION ALL ")
}

/// Provides aggregate reporting queries. Pure reads, no status mutation.
pub struct ReportRepo;

impl ReportRepo {
    /// Count of documents per entity type and status.
    pub async fn status_summary(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        let union = union_all(
            "SELECT '{type}' AS entity_type, status, COUNT(*) AS count \
             FROM {table} GROUP BY status",
        );
        let query = format!("SELECT * FROM ({union}) t ORDER BY entity_type, status");
        sqlx::query_as::<_, StatusCount>(&query).fetch_all(pool).await
    }

    /// Created/approved document counts per calendar month within a range,
    /// summed across all entity types.
    pub async fn monthly(
        pool: &PgPool,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<MonthlyCount>, sqlx::Error> {
        let union = union_all(
            "SELECT date_trunc('month', created_at) AS month, \
                    COUNT(*) AS created, COUNT(approved_at) AS approved \
             FROM {table} WHERE created_at >= $1 AND created_at <= $2 \
             GROUP BY 1",
        );
        let query = format!(
            "SELECT month, SUM(created)::bigint AS created, SUM(approved)::bigint AS approved \
             FROM ({union}) t GROUP BY month ORDER BY month"
        );
        sqlx::query_as::<_, MonthlyCount>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
