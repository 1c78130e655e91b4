//! Well-known workflow status constants.
//!
//! Statuses are persisted as lowercase strings, so these values must match
//! what is stored in each entity table's `status` column bit-for-bit.

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_SUBMITTED: &str = "submitted";
pub const STATUS_UNDER_REVIEW: &str = "under_review";
pub const STATUS_PENDING_REVISION: &str = "pending_revision";
pub const STATUS_PENDING_MANAGER_APPROVAL: &str = "pending_manager_approval";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Every status a document entity can hold.
pub const ALL_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_SUBMITTED,
    STATUS_UNDER_REVIEW,
    STATUS_PENDING_REVISION,
    STATUS_PENDING_MANAGER_APPROVAL,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// Statuses with no outgoing transitions at all.
///
/// `approved` is not listed here: it still permits the `complete` action.
pub const TERMINAL_STATUSES: &[&str] = &[STATUS_REJECTED, STATUS_COMPLETED, STATUS_CANCELLED];

/// Statuses in which the owner may still edit the domain payload.
pub const EDITABLE_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PENDING_REVISION];

/// Returns `true` if `status` allows payload edits by the owner.
pub fn is_editable(status: &str) -> bool {
    EDITABLE_STATUSES.contains(&status)
}

/// Returns `true` if `status` has no outgoing transitions.
pub fn is_terminal(status: &str) -> bool {
    TERMINAL_STATUSES.contains(&status)
}
