//! International guest registration models and DTOs.

use chrono::NaiveDate;
use oia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `guests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Guest {
    pub id: DbId,
    pub status: String,
    pub created_by: DbId,
    pub reviewed_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub rejected_at: Option<Timestamp>,
    pub rejection_reason: Option<String>,
    pub revision_count: i32,
    pub full_name: String,
    pub nationality: String,
    pub passport_number: Option<String>,
    pub host_unit: String,
    pub purpose: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub sponsor_user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a guest visit.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGuest {
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    #[validate(length(min = 1, max = 100))]
    pub nationality: String,
    pub passport_number: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub host_unit: String,
    pub purpose: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub sponsor_user_id: Option<DbId>,
}

/// DTO for editing guest payload fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGuest {
    pub full_name: Option<String>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub host_unit: Option<String>,
    pub purpose: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub sponsor_user_id: Option<DbId>,
}
