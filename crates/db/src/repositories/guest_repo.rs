//! Repository for the `guests` table.

use oia_core::pagination::{Page, PageParams};
use oia_core::status::STATUS_DRAFT;
use oia_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::filter::ListFilter;
use crate::models::guest::{CreateGuest, Guest, UpdateGuest};
use crate::repositories::document_query;

const TABLE: &str = "guests";

const COLUMNS: &str = "id, status, created_by, reviewed_by, approved_by, approved_at, \
                       rejected_at, rejection_reason, revision_count, full_name, nationality, \
                       passport_number, host_unit, purpose, arrival_date, departure_date, \
                       sponsor_user_id, created_at, updated_at";

/// Provides payload CRUD for guest registrations.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest registration in `draft`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateGuest,
    ) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests \
             (id, status, created_by, full_name, nationality, passport_number, host_unit, \
              purpose, arrival_date, departure_date, sponsor_user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(Uuid::now_v7())
            .bind(STATUS_DRAFT)
            .bind(owner_id)
            .bind(&input.full_name)
            .bind(&input.nationality)
            .bind(&input.passport_number)
            .bind(&input.host_unit)
            .bind(&input.purpose)
            .bind(input.arrival_date)
            .bind(input.departure_date)
            .bind(input.sponsor_user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a guest registration by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests WHERE id = $1");
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List guest registrations matching `filter`, newest first, paginated.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: &PageParams,
    ) -> Result<Page<Guest>, sqlx::Error> {
        document_query::list_page(pool, TABLE, COLUMNS, filter, page).await
    }

    /// Update payload fields; workflow columns are untouched.
    pub async fn update_payload(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGuest,
    ) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!(
            "UPDATE guests SET
                full_name = COALESCE($2, full_name),
                nationality = COALESCE($3, nationality),
                passport_number = COALESCE($4, passport_number),
                host_unit = COALESCE($5, host_unit),
                purpose = COALESCE($6, purpose),
                arrival_date = COALESCE($7, arrival_date),
                departure_date = COALESCE($8, departure_date),
                sponsor_user_id = COALESCE($9, sponsor_user_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.nationality)
            .bind(&input.passport_number)
            .bind(&input.host_unit)
            .bind(&input.purpose)
            .bind(input.arrival_date)
            .bind(input.departure_date)
            .bind(input.sponsor_user_id)
            .fetch_optional(pool)
            .await
    }
}
