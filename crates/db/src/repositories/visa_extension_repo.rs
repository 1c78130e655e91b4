//! Repository for the `visa_extensions` table.

use oia_core::pagination::{Page, PageParams};
use oia_core::status::STATUS_DRAFT;
use oia_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::filter::ListFilter;
use crate::models::visa::{CreateVisaExtension, UpdateVisaExtension, VisaExtension};
use crate::repositories::document_query;

const TABLE: &str = "visa_extensions";

const COLUMNS: &str = "id, status, created_by, reviewed_by, approved_by, approved_at, \
                       rejected_at, rejection_reason, revision_count, visa_application_id, \
                       current_expiry, requested_until, justification, document_path, \
                       created_at, updated_at";

/// Provides payload CRUD for visa extension requests.
pub struct VisaExtensionRepo;

impl VisaExtensionRepo {
    /// Insert a new extension request in `draft`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateVisaExtension,
    ) -> Result<VisaExtension, sqlx::Error> {
        let query = format!(
            "INSERT INTO visa_extensions \
             (id, status, created_by, visa_application_id, current_expiry, requested_until, \
              justification, document_path)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisaExtension>(&query)
            .bind(Uuid::now_v7())
            .bind(STATUS_DRAFT)
            .bind(owner_id)
            .bind(input.visa_application_id)
            .bind(input.current_expiry)
            .bind(input.requested_until)
            .bind(&input.justification)
            .bind(&input.document_path)
            .fetch_one(pool)
            .await
    }

    /// Find an extension request by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VisaExtension>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visa_extensions WHERE id = $1");
        sqlx::query_as::<_, VisaExtension>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List extension requests matching `filter`, newest first, paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: &PageParams,
    ) -> Result<Page<VisaExtension>, sqlx::Error> {
        document_query::list_page(pool, TABLE, COLUMNS, filter, page).await
    }

    /// Update payload fields; workflow columns are untouched.
    pub async fn update_payload(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVisaExtension,
    ) -> Result<Option<VisaExtension>, sqlx::Error> {
        let query = format!(
            "UPDATE visa_extensions SET
                current_expiry = COALESCE($2, current_expiry),
                requested_until = COALESCE($3, requested_until),
                justification = COALESCE($4, justification),
                document_path = COALESCE($5, document_path),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisaExtension>(&query)
            .bind(id)
            .bind(input.current_expiry)
            .bind(input.requested_until)
            .bind(&input.justification)
            .bind(&input.document_path)
            .fetch_optional(pool)
            .await
    }
}
