//! Repository for the `translation_certificates` table.

use oia_core::pagination::{Page, PageParams};
use oia_core::status::STATUS_DRAFT;
use oia_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::filter::ListFilter;
use crate::models::translation::{
    CreateTranslationCertificate, TranslationCertificate, UpdateTranslationCertificate,
};
use crate::repositories::document_query;

const TABLE: &str = "translation_certificates";

const COLUMNS: &str = "id, status, created_by, reviewed_by, approved_by, approved_at, \
                       rejected_at, rejection_reason, revision_count, translation_request_id, \
                       certificate_number, issued_to, language_pair, document_path, \
                       created_at, updated_at";

/// Provides payload CRUD for translation certificates.
pub struct TranslationCertificateRepo;

impl TranslationCertificateRepo {
    /// Insert a new certificate draft, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateTranslationCertificate,
    ) -> Result<TranslationCertificate, sqlx::Error> {
        let query = format!(
            "INSERT INTO translation_certificates \
             (id, status, created_by, translation_request_id, certificate_number, issued_to, \
              language_pair, document_path)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TranslationCertificate>(&query)
            .bind(Uuid::now_v7())
            .bind(STATUS_DRAFT)
            .bind(owner_id)
            .bind(input.translation_request_id)
            .bind(&input.certificate_number)
            .bind(&input.issued_to)
            .bind(&input.language_pair)
            .bind(&input.document_path)
            .fetch_one(pool)
            .await
    }

    /// Find a certificate by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TranslationCertificate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM translation_certificates WHERE id = $1");
        sqlx::query_as::<_, TranslationCertificate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List certificates matching `filter`, newest first, paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: &PageParams,
    ) -> Result<Page<TranslationCertificate>, sqlx::Error> {
        document_query::list_page(pool, TABLE, COLUMNS, filter, page).await
    }

    /// Update payload fields; workflow columns are untouched.
    pub async fn update_payload(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTranslationCertificate,
    ) -> Result<Option<TranslationCertificate>, sqlx::Error> {
        let query = format!(
            "UPDATE translation_certificates SET
                certificate_number = COALESCE($2, certificate_number),
                issued_to = COALESCE($3, issued_to),
                language_pair = COALESCE($4, language_pair),
                document_path = COALESCE($5, document_path),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TranslationCertificate>(&query)
            .bind(id)
            .bind(&input.certificate_number)
            .bind(&input.issued_to)
            .bind(&input.language_pair)
            .bind(&input.document_path)
            .fetch_optional(pool)
            .await
    }
}
