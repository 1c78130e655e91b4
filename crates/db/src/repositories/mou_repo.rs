//! Repository for the `mous` table.

use oia_core::pagination::{Page, PageParams};
use oia_core::status::STATUS_DRAFT;
use oia_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::filter::ListFilter;
use crate::models::mou::{CreateMou, Mou, UpdateMou};
use crate::repositories::document_query;

const TABLE: &str = "mous";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, status, created_by, reviewed_by, approved_by, approved_at, \
                       rejected_at, rejection_reason, revision_count, title, partner_name, \
                       partner_country, scope_summary, effective_date, expiry_date, \
                       document_path, created_at, updated_at";

/// Provides payload CRUD for MOUs. Status changes go through `WorkflowRepo`.
pub struct MouRepo;

impl MouRepo {
    /// Insert a new MOU in `draft`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateMou,
    ) -> Result<Mou, sqlx::Error> {
        let query = format!(
            "INSERT INTO mous (id, status, created_by, title, partner_name, partner_country, \
                               scope_summary, effective_date, expiry_date, document_path)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mou>(&query)
            .bind(Uuid::now_v7())
            .bind(STATUS_DRAFT)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.partner_name)
            .bind(&input.partner_country)
            .bind(&input.scope_summary)
            .bind(input.effective_date)
            .bind(input.expiry_date)
            .bind(&input.document_path)
            .fetch_one(pool)
            .await
    }

    /// Find an MOU by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mou>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mous WHERE id = $1");
        sqlx::query_as::<_, Mou>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List MOUs matching `filter`, newest first, paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: &PageParams,
    ) -> Result<Page<Mou>, sqlx::Error> {
        document_query::list_page(pool, TABLE, COLUMNS, filter, page).await
    }

    /// Update payload fields. Only non-`None` fields in `input` are applied;
    /// workflow columns are untouched. Returns `None` if the row is missing.
    pub async fn update_payload(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMou,
    ) -> Result<Option<Mou>, sqlx::Error> {
        let query = format!(
            "UPDATE mous SET
                title = COALESCE($2, title),
                partner_name = COALESCE($3, partner_name),
                partner_country = COALESCE($4, partner_country),
                scope_summary = COALESCE($5, scope_summary),
                effective_date = COALESCE($6, effective_date),
                expiry_date = COALESCE($7, expiry_date),
                document_path = COALESCE($8, document_path),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mou>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.partner_name)
            .bind(&input.partner_country)
            .bind(&input.scope_summary)
            .bind(input.effective_date)
            .bind(input.expiry_date)
            .bind(&input.document_path)
            .fetch_optional(pool)
            .await
    }
}
