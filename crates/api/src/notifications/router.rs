//! Event-to-notification routing engine.
//!
//! [`NotificationRouter`] subscribes to the workflow event bus and fans each
//! committed transition out to the users who need to see it: the document
//! owner, and the reviewer pool whose queue the document just entered.

use tokio::sync::broadcast;

use oia_core::roles::{ROLE_MANAGER, ROLE_SPECIALIST};
use oia_core::types::DbId;
use oia_core::workflow::Action;
use oia_db::repositories::{NotificationRepo, RoleRepo, UserRepo, WorkflowRepo};
use oia_db::DbPool;
use oia_events::{EmailDelivery, WorkflowEvent};

/// Routes workflow events to user notifications.
///
/// Consumes events from the broadcast channel and, for each event, determines
/// the target users, writes an in-app notification row per target, and sends
/// a best-effort email when SMTP is configured. Email failures are logged and
/// never block in-app delivery.
pub struct NotificationRouter {
    pool: DbPool,
    email: Option<EmailDelivery>,
}

impl NotificationRouter {
    /// Create a new router. `email` is `None` when SMTP is not configured.
    pub fn new(pool: DbPool, email: Option<EmailDelivery>) -> Self {
        Self { pool, email }
    }

    /// Run the main routing loop.
    ///
    /// Subscribes to the event bus via `receiver` and processes each event.
    /// The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](oia_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<WorkflowEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = self.route_event(&event).await {
                        tracing::error!(
                            error = %e,
                            event = %event.event_name(),
                            "Failed to route event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification router shutting down");
                    break;
                }
            }
        }
    }

    /// Route a single event to all affected users.
    async fn route_event(&self, event: &WorkflowEvent) -> Result<(), sqlx::Error> {
        let targets = self.determine_targets(event).await?;
        let message = render_message(event);

        for user_id in targets {
            NotificationRepo::create(
                &self.pool,
                user_id,
                event.entity_type.as_str(),
                event.entity_id,
                event.action.as_str(),
                &message,
            )
            .await?;

            self.send_email(user_id, event).await;
        }

        Ok(())
    }

    /// Determine which users should be notified about a transition.
    ///
    /// The owner is always notified unless they performed the action
    /// themselves. Submissions additionally notify the specialist pool and
    /// forwards notify the manager pool, since those are the queues the
    /// document just landed in.
    async fn determine_targets(&self, event: &WorkflowEvent) -> Result<Vec<DbId>, sqlx::Error> {
        let mut targets = Vec::new();

        let owner =
            WorkflowRepo::owner_of(&self.pool, event.entity_type, event.entity_id).await?;
        if let Some(owner_id) = owner {
            if owner_id != event.actor_user_id {
                targets.push(owner_id);
            }
        }

        let pool_role = match event.action {
            Action::Submit => Some(ROLE_SPECIALIST),
            Action::Forward => Some(ROLE_MANAGER),
            _ => None,
        };
        if let Some(role) = pool_role {
            for user_id in RoleRepo::user_ids_with_role(&self.pool, role).await? {
                if user_id != event.actor_user_id && !targets.contains(&user_id) {
                    targets.push(user_id);
                }
            }
        }

        Ok(targets)
    }

    /// Best-effort email delivery for one target.
    async fn send_email(&self, user_id: DbId, event: &WorkflowEvent) {
        let Some(email) = &self.email else {
            return;
        };

        let user = match UserRepo::find_by_id(&self.pool, user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return,
            Err(e) => {
                tracing::error!(error = %e, %user_id, "Failed to look up email recipient");
                return;
            }
        };

        if let Err(e) = email.deliver(&user.email, event).await {
            tracing::error!(
                error = %e,
                %user_id,
                event = %event.event_name(),
                "Failed to send notification email"
            );
        }
    }
}

/// Human-readable notification message for a transition.
fn render_message(event: &WorkflowEvent) -> String {
    let mut message = format!(
        "{} moved from '{}' to '{}'",
        event.entity_type.display_name(),
        event.from_status.replace('_', " "),
        event.to_status.replace('_', " "),
    );
    if let Some(comment) = &event.comment {
        message.push_str(": ");
        message.push_str(comment);
    }
    message
}
