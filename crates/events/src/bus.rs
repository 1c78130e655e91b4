//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`WorkflowEvent`]s. It is
//! shared via `Arc<EventBus>` across the application; the notification
//! router subscribes to it and fans transitions out to users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use oia_core::types::DbId;
use oia_core::workflow::{Action, EntityType};

// ---------------------------------------------------------------------------
// WorkflowEvent
// ---------------------------------------------------------------------------

/// A status transition that was committed to the database.
///
/// Published after the transition row exists, so subscribers may treat the
/// event as fact. Delivery failures downstream never affect the transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEvent {
    /// Which document type transitioned.
    pub entity_type: EntityType,

    /// Database id of the document.
    pub entity_id: DbId,

    /// The action that was performed.
    pub action: Action,

    /// Status before the transition.
    pub from_status: String,

    /// Status after the transition.
    pub to_status: String,

    /// The user that performed the action.
    pub actor_user_id: DbId,

    /// Reviewer comment attached to the transition, if any.
    pub comment: Option<String>,

    /// When the transition was recorded (UTC).
    pub timestamp: DateTime<Utc>,
}

impl WorkflowEvent {
    /// Dot-separated event name, e.g. `"mou.approve"`.
    pub fn event_name(&self) -> String {
        format!("{}.{}", self.entity_type.as_str(), self.action.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`WorkflowEvent`].
pub struct EventBus {
    sender: broadcast::Sender<WorkflowEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// the transition itself is already durable in the history table.
    pub fn publish(&self, event: WorkflowEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<WorkflowEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
