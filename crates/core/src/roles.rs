//! Well-known role name constants.
//!
//! These must match the seed data in the `roles` table migration. A user
//! holds a *set* of roles; single-role accounts are simply sets of size one.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_SPECIALIST: &str = "specialist";
pub const ROLE_USER: &str = "user";
pub const ROLE_STUDENT: &str = "student";
pub const ROLE_VIEWER: &str = "viewer";
pub const ROLE_SYSTEM: &str = "system";

/// All seeded roles, in seed order.
pub const ALL_ROLES: &[&str] = &[
    ROLE_ADMIN,
    ROLE_MANAGER,
    ROLE_SPECIALIST,
    ROLE_USER,
    ROLE_STUDENT,
    ROLE_VIEWER,
    ROLE_SYSTEM,
];
