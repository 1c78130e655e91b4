//! Visa application and visa extension models and DTOs.

use chrono::NaiveDate;
use oia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `visa_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisaApplication {
    pub id: DbId,
    pub status: String,
    pub created_by: DbId,
    pub reviewed_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub rejected_at: Option<Timestamp>,
    pub rejection_reason: Option<String>,
    pub revision_count: i32,
    pub applicant_name: String,
    pub passport_number: String,
    pub nationality: String,
    pub visa_type: String,
    pub entry_date: Option<NaiveDate>,
    pub exit_date: Option<NaiveDate>,
    pub sponsor_unit: Option<String>,
    pub document_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a visa application.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVisaApplication {
    #[validate(length(min = 1, max = 255))]
    pub applicant_name: String,
    #[validate(length(min = 1, max = 64))]
    pub passport_number: String,
    #[validate(length(min = 1, max = 100))]
    pub nationality: String,
    #[validate(length(min = 1, max = 100))]
    pub visa_type: String,
    pub entry_date: Option<NaiveDate>,
    pub exit_date: Option<NaiveDate>,
    pub sponsor_unit: Option<String>,
    pub document_path: Option<String>,
}

/// DTO for editing visa application payload fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVisaApplication {
    pub applicant_name: Option<String>,
    pub passport_number: Option<String>,
    pub nationality: Option<String>,
    pub visa_type: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub exit_date: Option<NaiveDate>,
    pub sponsor_unit: Option<String>,
    pub document_path: Option<String>,
}

/// A row from the `visa_extensions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisaExtension {
    pub id: DbId,
    pub status: String,
    pub created_by: DbId,
    pub reviewed_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub rejected_at: Option<Timestamp>,
    pub rejection_reason: Option<String>,
    pub revision_count: i32,
    pub visa_application_id: DbId,
    pub current_expiry: NaiveDate,
    pub requested_until: NaiveDate,
    pub justification: Option<String>,
    pub document_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a visa extension request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVisaExtension {
    pub visa_application_id: DbId,
    pub current_expiry: NaiveDate,
    pub requested_until: NaiveDate,
    pub justification: Option<String>,
    pub document_path: Option<String>,
}

/// DTO for editing visa extension payload fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVisaExtension {
    pub current_expiry: Option<NaiveDate>,
    pub requested_until: Option<NaiveDate>,
    pub justification: Option<String>,
    pub document_path: Option<String>,
}
