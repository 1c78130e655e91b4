//! Shared list-filter DTO for document entities.

use oia_core::types::{DbId, Timestamp};
use serde::Deserialize;

/// Filter parameters accepted by every document list endpoint.
///
/// All fields are optional; absent fields do not constrain the query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    /// Exact status match (e.g. `"under_review"`).
    pub status: Option<String>,
    /// Only rows created by this user.
    pub owner_id: Option<DbId>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<Timestamp>,
    /// Inclusive upper bound on `created_at`.
    pub created_to: Option<Timestamp>,
}
