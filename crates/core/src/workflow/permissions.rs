//! Static role → action permission table.
//!
//! Loaded nowhere and mutated never: the table is process-wide `const` data.
//! Lookups fail closed — an unknown role grants nothing, and absence from
//! the table means deny.

use crate::roles::{
    ROLE_ADMIN, ROLE_MANAGER, ROLE_SPECIALIST, ROLE_STUDENT, ROLE_USER,
};

use super::{Action, EntityType};

/// Workflow actions granted to each role, uniform across entity types.
///
/// `viewer` and `system` hold no workflow actions (read-only / machine
/// accounts), so they are simply absent. Absence means deny.
const GRANTS: &[(&str, &[Action])] = &[
    (
        ROLE_ADMIN,
        &[
            Action::Submit,
            Action::StartReview,
            Action::RequestRevision,
            Action::Forward,
            Action::Approve,
            Action::Reject,
            Action::Complete,
            Action::Cancel,
        ],
    ),
    (
        ROLE_MANAGER,
        &[
            Action::StartReview,
            Action::RequestRevision,
            Action::Forward,
            Action::Approve,
            Action::Reject,
            Action::Complete,
        ],
    ),
    (
        ROLE_SPECIALIST,
        &[
            Action::StartReview,
            Action::RequestRevision,
            Action::Forward,
            Action::Reject,
            Action::Complete,
        ],
    ),
    (ROLE_USER, &[Action::Submit, Action::Cancel]),
    (ROLE_STUDENT, &[Action::Submit, Action::Cancel]),
];

/// Returns `true` if the single `role` grants `action`.
fn role_allows(role: &str, action: Action) -> bool {
    GRANTS
        .iter()
        .find(|(r, _)| *r == role)
        .is_some_and(|(_, actions)| actions.contains(&action))
}

/// Permission check over a role *set*: the union of each role's grants.
///
/// Deterministic and side-effect free. Unknown roles contribute nothing.
pub fn can<S: AsRef<str>>(roles: &[S], action: Action) -> bool {
    roles.iter().any(|role| role_allows(role.as_ref(), action))
}

/// The dotted permission code for an entity/action pair, e.g. `"mou.approve"`.
///
/// This is the vocabulary denial errors and audit logs speak.
pub fn permission_code(entity_type: EntityType, action: Action) -> String {
    format!("{}.{}", entity_type.as_str(), action.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{ROLE_SYSTEM, ROLE_VIEWER};

    #[test]
    fn admin_holds_every_action() {
        for action in Action::ALL {
            assert!(can(&["admin"], *action));
        }
    }

    #[test]
    fn viewer_and_system_hold_nothing() {
        for action in Action::ALL {
            assert!(!can(&[ROLE_VIEWER], *action));
            assert!(!can(&[ROLE_SYSTEM], *action));
        }
    }

    #[test]
    fn unknown_role_denies() {
        assert!(!can(&["superuser"], Action::Approve));
        assert!(!can::<&str>(&[], Action::Submit));
    }

    #[test]
    fn role_set_grants_are_unioned() {
        // A user who is also a specialist can both submit and review.
        let roles = ["user", "specialist"];
        assert!(can(&roles, Action::Submit));
        assert!(can(&roles, Action::StartReview));
        assert!(!can(&roles, Action::Approve));
    }

    #[test]
    fn only_managers_and_admins_approve() {
        assert!(can(&["manager"], Action::Approve));
        assert!(can(&["admin"], Action::Approve));
        assert!(!can(&["specialist"], Action::Approve));
        assert!(!can(&["user"], Action::Approve));
    }

    #[test]
    fn permission_codes_are_dotted() {
        assert_eq!(permission_code(EntityType::Mou, Action::Approve), "mou.approve");
        assert_eq!(
            permission_code(EntityType::TranslationRequest, Action::StartReview),
            "translation_request.start_review"
        );
    }

    #[test]
    fn can_is_idempotent() {
        let roles = ["manager"];
        let first = can(&roles, Action::Approve);
        for _ in 0..10 {
            assert_eq!(can(&roles, Action::Approve), first);
        }
    }
}
