//! Repository for the `visa_applications` table.

use oia_core::pagination::{Page, PageParams};
use oia_core::status::STATUS_DRAFT;
use oia_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::filter::ListFilter;
use crate::models::visa::{CreateVisaApplication, UpdateVisaApplication, VisaApplication};
use crate::repositories::document_query;

const TABLE: &str = "visa_applications";

const COLUMNS: &str = "id, status, created_by, reviewed_by, approved_by, approved_at, \
                       rejected_at, rejection_reason, revision_count, applicant_name, \
                       passport_number, nationality, visa_type, entry_date, exit_date, \
                       sponsor_unit, document_path, created_at, updated_at";

/// Provides payload CRUD for visa applications.
pub struct VisaApplicationRepo;

impl VisaApplicationRepo {
    /// Insert a new visa application in `draft`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateVisaApplication,
    ) -> Result<VisaApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO visa_applications \
             (id, status, created_by, applicant_name, passport_number, nationality, visa_type, \
              entry_date, exit_date, sponsor_unit, document_path)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisaApplication>(&query)
            .bind(Uuid::now_v7())
            .bind(STATUS_DRAFT)
            .bind(owner_id)
            .bind(&input.applicant_name)
            .bind(&input.passport_number)
            .bind(&input.nationality)
            .bind(&input.visa_type)
            .bind(input.entry_date)
            .bind(input.exit_date)
            .bind(&input.sponsor_unit)
            .bind(&input.document_path)
            .fetch_one(pool)
            .await
    }

    /// Find a visa application by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VisaApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visa_applications WHERE id = $1");
        sqlx::query_as::<_, VisaApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List visa applications matching `filter`, newest first, paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: &PageParams,
    ) -> Result<Page<VisaApplication>, sqlx::Error> {
        document_query::list_page(pool, TABLE, COLUMNS, filter, page).await
    }

    /// Update payload fields; workflow columns are untouched.
    pub async fn update_payload(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVisaApplication,
    ) -> Result<Option<VisaApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE visa_applications SET
                applicant_name = COALESCE($2, applicant_name),
                passport_number = COALESCE($3, passport_number),
                nationality = COALESCE($4, nationality),
                visa_type = COALESCE($5, visa_type),
                entry_date = COALESCE($6, entry_date),
                exit_date = COALESCE($7, exit_date),
                sponsor_unit = COALESCE($8, sponsor_unit),
                document_path = COALESCE($9, document_path),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisaApplication>(&query)
            .bind(id)
            .bind(&input.applicant_name)
            .bind(&input.passport_number)
            .bind(&input.nationality)
            .bind(&input.visa_type)
            .bind(input.entry_date)
            .bind(input.exit_date)
            .bind(&input.sponsor_unit)
            .bind(&input.document_path)
            .fetch_optional(pool)
            .await
    }
}
