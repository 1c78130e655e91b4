//! Domain logic for the international-cooperation portal.
//!
//! This crate is free of I/O: it defines the shared identifier and timestamp
//! types, the domain error taxonomy, the role and status vocabularies, the
//! generic approval workflow engine, and pagination helpers. Persistence and
//! HTTP concerns live in `oia-db` and `oia-api`.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod status;
pub mod types;
pub mod workflow;
