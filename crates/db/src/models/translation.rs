//! Translation request and certificate models and DTOs.
//!
//! One canonical request model: the certificate is a separate entity issued
//! against an approved request, not a variant of the request itself.

use chrono::NaiveDate;
use oia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `translation_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TranslationRequest {
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
    pub source_language: String,
    pub target_language: String,
    pub document_type: Option<String>,
    pub page_count: Option<i32>,
    pub requested_deadline: Option<NaiveDate>,
    pub document_path: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a translation request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTranslationRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: String,
    #[validate(length(min = 2, max = 16))]
    pub source_language: String,
    #[validate(length(min = 2, max = 16))]
    pub target_language: String,
    pub document_type: Option<String>,
    #[validate(range(min = 1))]
    pub page_count: Option<i32>,
    pub requested_deadline: Option<NaiveDate>,
    pub document_path: Option<String>,
    pub notes: Option<String>,
}

/// DTO for editing translation request payload fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTranslationRequest {
    pub title: Option<String>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub document_type: Option<String>,
    pub page_count: Option<i32>,
    pub requested_deadline: Option<NaiveDate>,
    pub document_path: Option<String>,
    pub notes: Option<String>,
}

/// A row from the `translation_certificates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TranslationCertificate {
    pub id: DbId,
    pub status: String,
    pub created_by: DbId,
    pub reviewed_by: Option<DbId>,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub rejected_at: Option<Timestamp>,
    pub rejection_reason: Option<String>,
    pub revision_count: i32,
    pub translation_request_id: DbId,
    pub certificate_number: String,
    pub issued_to: String,
    pub language_pair: String,
    pub document_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for drafting a certificate against an approved request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTranslationCertificate {
    pub translation_request_id: DbId,
    #[validate(length(min = 1, max = 64))]
    pub certificate_number: String,
    #[validate(length(min = 1, max = 255))]
    pub issued_to: String,
    #[validate(length(min = 1, max = 32))]
    pub language_pair: String,
    pub document_path: Option<String>,
}

/// DTO for editing certificate payload fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTranslationCertificate {
    pub certificate_number: Option<String>,
    pub issued_to: Option<String>,
    pub language_pair: Option<String>,
    pub document_path: Option<String>,
}
