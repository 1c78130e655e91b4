//! The transition guard: decides whether a requested status change is
//! permitted and what it does to the entity.
//!
//! [`plan_transition`] is pure — it reads nothing and writes nothing. The
//! resulting [`TransitionPlan`] is handed to the db layer, which re-checks
//! the from-status under a row lock before applying, so a concurrent
//! transition loser fails with `InvalidTransition` instead of overwriting.

use crate::types::DbId;

use super::permissions::{can, permission_code};
use super::{workflow_config, Action, EntityType, WorkflowError};

/// The acting user as seen by the guard: identity plus role set.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: DbId,
    pub roles: Vec<String>,
}

/// A validated, not-yet-applied transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    pub entity_type: EntityType,
    pub action: Action,
    /// Status the entity must still hold when the plan is applied.
    pub from_status: &'static str,
    pub to_status: &'static str,
    /// Actor recorded in the history row and in reviewer/approver fields.
    pub actor_id: DbId,
    /// Justification comment; always present for reason-requiring actions.
    pub reason: Option<String>,
}

impl TransitionPlan {
    /// Whether applying this plan stamps `approved_by` / `approved_at`.
    pub fn sets_approval(&self) -> bool {
        self.action == Action::Approve
    }

    /// Whether applying this plan stamps `rejected_at` and the reason.
    pub fn sets_rejection(&self) -> bool {
        self.action == Action::Reject
    }

    /// Whether applying this plan stamps `reviewed_by`.
    pub fn sets_reviewer(&self) -> bool {
        matches!(self.action, Action::StartReview | Action::Forward)
    }

    /// Whether applying this plan increments `revision_count`.
    pub fn increments_revision(&self) -> bool {
        self.action == Action::RequestRevision
    }
}

/// Validate a requested action against the permission table and the
/// entity type's transition table.
///
/// Check order (first failure wins):
/// 1. role set lacks the action → [`WorkflowError::Forbidden`]
/// 2. `(current_status, action)` not in the table → [`WorkflowError::InvalidTransition`]
/// 3. reason required but absent/blank → [`WorkflowError::MissingReason`]
pub fn plan_transition(
    entity_type: EntityType,
    current_status: &str,
    action: Action,
    actor: &Actor,
    reason: Option<&str>,
) -> Result<TransitionPlan, WorkflowError> {
    if !can(&actor.roles, action) {
        return Err(WorkflowError::Forbidden {
            code: permission_code(entity_type, action),
        });
    }

    let config = workflow_config(entity_type);
    let Some((from_status, _, to_status)) = config
        .transitions
        .iter()
        .find(|(from, a, _)| *from == current_status && *a == action)
    else {
        return Err(WorkflowError::InvalidTransition {
            from: current_status.to_string(),
            action: action.as_str(),
        });
    };

    let reason = reason.map(str::trim).filter(|r| !r.is_empty());
    if action.requires_reason() && reason.is_none() {
        return Err(WorkflowError::MissingReason {
            action: action.as_str(),
        });
    }

    Ok(TransitionPlan {
        entity_type,
        action,
        from_status,
        to_status: *to_status,
        actor_id: actor.user_id,
        reason: reason.map(str::to_string),
    })
}
