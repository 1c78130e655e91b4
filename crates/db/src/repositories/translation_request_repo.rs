//! Repository for the `translation_requests` table.

use oia_core::pagination::{Page, PageParams};
use oia_core::status::STATUS_DRAFT;
use oia_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::filter::ListFilter;
use crate::models::translation::{
    CreateTranslationRequest, TranslationRequest, UpdateTranslationRequest,
};
use crate::repositories::document_query;

const TABLE: &str = "translation_requests";

const COLUMNS: &str = "id, status, created_by, reviewed_by, approved_by, approved_at, \
                       rejected_at, rejection_reason, revision_count, title, source_language, \
                       target_language, document_type, page_count, requested_deadline, \
                       document_path, notes, created_at, updated_at";

/// Provides payload CRUD for translation requests.
pub struct TranslationRequestRepo;

impl TranslationRequestRepo {
    /// Insert a new translation request in `draft`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateTranslationRequest,
    ) -> Result<TranslationRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO translation_requests \
             (id, status, created_by, title, source_language, target_language, document_type, \
              page_count, requested_deadline, document_path, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TranslationRequest>(&query)
            .bind(Uuid::now_v7())
            .bind(STATUS_DRAFT)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.source_language)
            .bind(&input.target_language)
            .bind(&input.document_type)
            .bind(input.page_count)
            .bind(input.requested_deadline)
            .bind(&input.document_path)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a translation request by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TranslationRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM translation_requests WHERE id = $1");
        sqlx::query_as::<_, TranslationRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List translation requests matching `filter`, newest first, paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: &PageParams,
    ) -> Result<Page<TranslationRequest>, sqlx::Error> {
        document_query::list_page(pool, TABLE, COLUMNS, filter, page).await
    }

    /// Update payload fields; workflow columns are untouched.
    pub async fn update_payload(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTranslationRequest,
    ) -> Result<Option<TranslationRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE translation_requests SET
                title = COALESCE($2, title),
                source_language = COALESCE($3, source_language),
                target_language = COALESCE($4, target_language),
                document_type = COALESCE($5, document_type),
                page_count = COALESCE($6, page_count),
                requested_deadline = COALESCE($7, requested_deadline),
                document_path = COALESCE($8, document_path),
                notes = COALESCE($9, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TranslationRequest>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.source_language)
            .bind(&input.target_language)
            .bind(&input.document_type)
            .bind(input.page_count)
            .bind(input.requested_deadline)
            .bind(&input.document_path)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }
}
