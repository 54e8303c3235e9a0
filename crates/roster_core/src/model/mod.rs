//! Domain model for the person record set.
//!
//! # Responsibility
//! - Define the canonical data structures used by store, queries and export.
//!
//! # Invariants
//! - Every record is identified by a stable `PersonId`.
//! - Deletion is a hard removal; the id is never handed out again.

pub mod person;
