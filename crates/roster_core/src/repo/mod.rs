//! Repository layer: contract and flat-file-backed store.
//!
//! # Responsibility
//! - Define the data access contract consumed by the external
//!   request-handling layer.
//! - Keep persistence details inside the store implementation.
//!
//! # Invariants
//! - Unknown-id mutations are reported as explicit `NotFound` outcomes,
//!   never as errors and never silently.

pub mod person_repo;
