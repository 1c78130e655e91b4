//! Entity models and DTOs.
//!
//! `FromRow` structs mirror table rows one-to-one; `Create*`/`Update*`
//! structs are the write DTOs consumed by the repositories.

pub mod filter;
pub mod guest;
pub mod history;
pub mod mou;
pub mod notification;
pub mod report;
pub mod role;
pub mod session;
pub mod translation;
pub mod user;
pub mod visa;
