//! Workflow event bus and notification delivery.
//!
//! Building blocks for turning status transitions into notifications:
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`WorkflowEvent`] — the canonical transition event envelope.
//! - [`email`] — optional SMTP delivery for external notification.

pub mod bus;
pub mod email;

pub use bus::{EventBus, WorkflowEvent};
pub use email::{EmailConfig, EmailDelivery};
