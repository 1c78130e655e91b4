//! Shared query parameter types for API handlers.
//!
//! Query structs are flat (no `serde(flatten)`) because the urlencoded
//! deserializer cannot flatten non-string fields.

use serde::Deserialize;

use oia_core::pagination::PageParams;
use oia_core::types::{DbId, Timestamp};
use oia_db::models::filter::ListFilter;

/// Query parameters accepted by every document list endpoint:
/// filters plus 1-indexed pagination.
#[derive(Debug, Deserialize)]
pub struct DocumentListQuery {
    pub status: Option<String>,
    pub owner_id: Option<DbId>,
    pub created_from: Option<Timestamp>,
    pub created_to: Option<Timestamp>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl DocumentListQuery {
    pub fn filter(&self) -> ListFilter {
        ListFilter {
            status: self.status.clone(),
            owner_id: self.owner_id,
            created_from: self.created_from,
            created_to: self.created_to,
        }
    }

    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationListQuery {
    #[serde(default)]
    pub unread_only: bool,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl NotificationListQuery {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Inclusive date range for `GET /reports/monthly`.
#[derive(Debug, Deserialize)]
pub struct MonthlyRangeQuery {
    pub from: Timestamp,
    pub to: Timestamp,
}
