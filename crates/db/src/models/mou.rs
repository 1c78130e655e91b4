//! MOU entity models and DTOs.

use chrono::NaiveDate;
use oia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `mous` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mou {
    pub id: DbId,
    pub status: String,
    pub created_by: DbId,
    pub reviewed_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub rejected_at: Option<Timestamp>,
    pub rejection_reason: Option<String>,
    pub revision_count: i32,
    pub title: String,
    pub partner_name: String,
    pub partner_country: String,
    pub scope_summary: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub document_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an MOU (always starts in `draft`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMou {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub partner_name: String,
    #[validate(length(min = 1, max = 100))]
    pub partner_country: String,
    pub scope_summary: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub document_path: Option<String>,
}

/// DTO for editing MOU payload fields. Only non-`None` fields are applied;
/// the repository never touches workflow columns here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMou {
    #[validate(length(min = 1, max = 500))]
    pub title: Option<String>,
    pub partner_name: Option<String>,
    pub partner_country: Option<String>,
    pub scope_summary: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub document_path: Option<String>,
}
