//! Core domain logic for the roster person-record manager.
//! This crate is the single source of truth for repository invariants.

pub mod codec;
pub mod export;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;

pub use codec::{CodecError, CodecResult};
pub use export::{to_xlsx, ExportError, ExportResult};
pub use logging::{default_log_level, init_logging};
pub use model::person::{Gender, NewPerson, Person, PersonId};
pub use query::{QueryError, QueryResult};
pub use repo::person_repo::{CsvPersonRepository, MutationOutcome, PersonRepository};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
