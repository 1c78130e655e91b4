//! Generic approval workflow engine.
//!
//! Every document-like entity (MOU, visa application, visa extension, guest
//! registration, translation request, translation certificate) moves through
//! the same review lifecycle. Instead of duplicating the guard branching per
//! module, the engine is parameterized by a per-entity [`WorkflowConfig`]
//! looked up from the [`EntityType`].
//!
//! The engine itself is pure: [`guard::plan_transition`] only *decides*. The
//! decision is applied atomically by `oia-db`'s workflow repository inside a
//! row-locking transaction, together with the append-only history insert.

pub mod guard;
pub mod permissions;

use serde::{Deserialize, Serialize};

use crate::status::{
    STATUS_APPROVED, STATUS_CANCELLED, STATUS_COMPLETED, STATUS_DRAFT,
    STATUS_PENDING_MANAGER_APPROVAL, STATUS_PENDING_REVISION, STATUS_REJECTED, STATUS_SUBMITTED,
    STATUS_UNDER_REVIEW,
};

pub use guard::{plan_transition, Actor, TransitionPlan};
pub use permissions::can;

// ---------------------------------------------------------------------------
// Entity types
// ---------------------------------------------------------------------------

/// The closed set of document entity types governed by the workflow engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Mou,
    VisaApplication,
    VisaExtension,
    Guest,
    TranslationRequest,
    TranslationCertificate,
}

impl EntityType {
    /// Stable string form, used in permission codes, history rows, and events.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Mou => "mou",
            EntityType::VisaApplication => "visa_application",
            EntityType::VisaExtension => "visa_extension",
            EntityType::Guest => "guest",
            EntityType::TranslationRequest => "translation_request",
            EntityType::TranslationCertificate => "translation_certificate",
        }
    }

    /// The Postgres table holding this entity type.
    pub fn table(&self) -> &'static str {
        match self {
            EntityType::Mou => "mous",
            EntityType::VisaApplication => "visa_applications",
            EntityType::VisaExtension => "visa_extensions",
            EntityType::Guest => "guests",
            EntityType::TranslationRequest => "translation_requests",
            EntityType::TranslationCertificate => "translation_certificates",
        }
    }

    /// Human-readable entity name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityType::Mou => "MOU",
            EntityType::VisaApplication => "VisaApplication",
            EntityType::VisaExtension => "VisaExtension",
            EntityType::Guest => "Guest",
            EntityType::TranslationRequest => "TranslationRequest",
            EntityType::TranslationCertificate => "TranslationCertificate",
        }
    }

    /// All entity types, for reporting and table-totality tests.
    pub const ALL: &'static [EntityType] = &[
        EntityType::Mou,
        EntityType::VisaApplication,
        EntityType::VisaExtension,
        EntityType::Guest,
        EntityType::TranslationRequest,
        EntityType::TranslationCertificate,
    ];
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The closed set of workflow actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Submit,
    StartReview,
    RequestRevision,
    Forward,
    Approve,
    Reject,
    Complete,
    Cancel,
}

impl Action {
    /// Stable string form, matching the permission-code suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Submit => "submit",
            Action::StartReview => "start_review",
            Action::RequestRevision => "request_revision",
            Action::Forward => "forward",
            Action::Approve => "approve",
            Action::Reject => "reject",
            Action::Complete => "complete",
            Action::Cancel => "cancel",
        }
    }

    /// Actions that must carry a justification comment.
    pub fn requires_reason(&self) -> bool {
        matches!(self, Action::Reject | Action::RequestRevision)
    }

    pub const ALL: &'static [Action] = &[
        Action::Submit,
        Action::StartReview,
        Action::RequestRevision,
        Action::Forward,
        Action::Approve,
        Action::Reject,
        Action::Complete,
        Action::Cancel,
    ];
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures produced by the transition guard.
///
/// Persistence-level failures (`NotFound`, database errors) are raised by the
/// repository layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// The actor's role set does not grant the requested action. Carries
    /// the dotted permission code, e.g. `"mou.approve"`.
    #[error("role set does not grant '{code}'")]
    Forbidden { code: String },

    /// The action is not valid from the current status (including any action
    /// attempted on a terminal status).
    #[error("action '{action}' is not valid from status '{from}'")]
    InvalidTransition {
        from: String,
        action: &'static str,
    },

    /// The action requires a justification comment and none was supplied.
    #[error("action '{action}' requires a reason")]
    MissingReason { action: &'static str },
}

// ---------------------------------------------------------------------------
// Transition table
// ---------------------------------------------------------------------------

/// Per-entity-type workflow configuration.
///
/// The transition table is total in the sense required by the guard: any
/// `(from, action)` pair absent from `transitions` is a denied transition
/// (`InvalidTransition`), never a crash. Terminal statuses simply have no
/// entries.
#[derive(Debug)]
pub struct WorkflowConfig {
    /// Status assigned at creation time.
    pub initial_status: &'static str,
    /// `(from, action, to)` triples.
    pub transitions: &'static [(&'static str, Action, &'static str)],
}

/// The shared document lifecycle.
///
/// All six entity types currently use the same table; the indirection through
/// [`workflow_config`] keeps per-type divergence a data change rather than a
/// code change.
const DOCUMENT_TRANSITIONS: &[(&str, Action, &str)] = &[
    (STATUS_DRAFT, Action::Submit, STATUS_SUBMITTED),
    (STATUS_DRAFT, Action::Cancel, STATUS_CANCELLED),
    (STATUS_SUBMITTED, Action::StartReview, STATUS_UNDER_REVIEW),
    (STATUS_SUBMITTED, Action::Cancel, STATUS_CANCELLED),
    (STATUS_UNDER_REVIEW, Action::RequestRevision, STATUS_PENDING_REVISION),
    (STATUS_UNDER_REVIEW, Action::Forward, STATUS_PENDING_MANAGER_APPROVAL),
    (STATUS_UNDER_REVIEW, Action::Approve, STATUS_APPROVED),
    (STATUS_UNDER_REVIEW, Action::Reject, STATUS_REJECTED),
    (STATUS_PENDING_REVISION, Action::Submit, STATUS_SUBMITTED),
    (STATUS_PENDING_REVISION, Action::Cancel, STATUS_CANCELLED),
    (STATUS_PENDING_MANAGER_APPROVAL, Action::Approve, STATUS_APPROVED),
    (STATUS_PENDING_MANAGER_APPROVAL, Action::Reject, STATUS_REJECTED),
    (
        STATUS_PENDING_MANAGER_APPROVAL,
        Action::RequestRevision,
        STATUS_PENDING_REVISION,
    ),
    (STATUS_APPROVED, Action::Complete, STATUS_COMPLETED),
];

static DOCUMENT_WORKFLOW: WorkflowConfig = WorkflowConfig {
    initial_status: STATUS_DRAFT,
    transitions: DOCUMENT_TRANSITIONS,
};

/// Look up the workflow configuration for an entity type.
pub fn workflow_config(entity_type: EntityType) -> &'static WorkflowConfig {
    match entity_type {
        EntityType::Mou
        | EntityType::VisaApplication
        | EntityType::VisaExtension
        | EntityType::Guest
        | EntityType::TranslationRequest
        | EntityType::TranslationCertificate => &DOCUMENT_WORKFLOW,
    }
}

impl WorkflowConfig {
    /// Resolve the target status for `(from, action)`, or `None` if the pair
    /// is not in the table.
    pub fn target(&self, from: &str, action: Action) -> Option<&'static str> {
        self.transitions
            .iter()
            .find(|(f, a, _)| *f == from && *a == action)
            .map(|(_, _, to)| *to)
    }
}
