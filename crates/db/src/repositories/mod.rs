//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. The workflow repository is the
//! single write path for status changes; entity repositories only touch
//! payload columns.

mod document_query;

pub mod guest_repo;
pub mod history_repo;
pub mod mou_repo;
pub mod notification_repo;
pub mod report_repo;
pub mod role_repo;
pub mod session_repo;
pub mod translation_certificate_repo;
pub mod translation_request_repo;
pub mod user_repo;
pub mod visa_application_repo;
pub mod visa_extension_repo;
pub mod workflow_repo;

pub use guest_repo::GuestRepo;
pub use history_repo::HistoryRepo;
pub use mou_repo::MouRepo;
pub use notification_repo::NotificationRepo;
pub use report_repo::ReportRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use translation_certificate_repo::TranslationCertificateRepo;
pub use translation_request_repo::TranslationRequestRepo;
pub use user_repo::UserRepo;
pub use visa_application_repo::VisaApplicationRepo;
pub use visa_extension_repo::VisaExtensionRepo;
pub use workflow_repo::{WorkflowApplyError, WorkflowRepo};
