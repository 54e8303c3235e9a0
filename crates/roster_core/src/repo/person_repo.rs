//! Person repository contract and CSV-backed store.
//!
//! # Responsibility
//! - Own the authoritative in-memory record set.
//! - Funnel every mutation through one place so memory and the flat file
//!   stay synchronized.
//! - Delegate read-only derivations to the query module and export to the
//!   spreadsheet module.
//!
//! # Invariants
//! - Mutations are serialized behind a write lock; reads never observe a
//!   partially mutated set.
//! - Construction never fails: an unreadable data file starts the store
//!   empty.
//! - In-memory state stays authoritative when a save fails; persistence
//!   catches up on the next successful mutation.

use crate::codec;
use crate::export::{self, ExportResult};
use crate::model::person::{Gender, NewPerson, Person, PersonId};
use crate::query::{self, QueryResult};
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Result of an update or delete addressed by id.
///
/// An unknown id is a non-error by contract (stale references from
/// callers that fetched data before a deletion must not blow up), but the
/// no-op is reported explicitly so callers can surface it if they choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The record was found and the mutation took effect.
    Applied,
    /// No record with the given id exists; nothing changed.
    NotFound,
}

impl MutationOutcome {
    pub fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Repository contract exposed to the external request-handling layer.
pub trait PersonRepository {
    /// Full snapshot of the current record set.
    fn get_all(&self) -> Vec<Person>;
    /// Records matching `gender`, in snapshot order.
    fn filter_by_gender(&self, gender: Gender) -> Vec<Person>;
    /// Record with the earliest birth year, `None` when empty.
    fn oldest(&self) -> Option<Person>;
    /// Snapshot regrouped around a birth year; `year` must be positive.
    fn around_year(&self, year: i32) -> QueryResult<Vec<Person>>;
    /// Adds a record under a fresh id and returns that id.
    fn create(&self, input: NewPerson) -> PersonId;
    /// Overwrites all fields except `id` of the matching record.
    fn update(&self, person: &Person) -> MutationOutcome;
    /// Removes the record with `id` if present.
    fn delete(&self, id: PersonId) -> MutationOutcome;
    /// Current snapshot rendered as an xlsx byte payload.
    fn export_spreadsheet(&self) -> ExportResult<Vec<u8>>;
}

/// Flat-file-backed person store.
///
/// Each mutation rewrites the whole data file while still holding the
/// write lock, so durability is per mutation and two interleaved writers
/// cannot lose an update.
pub struct CsvPersonRepository {
    data_path: PathBuf,
    people: RwLock<Vec<Person>>,
}

impl CsvPersonRepository {
    /// Opens the store over the given data file.
    ///
    /// A missing or malformed file is a valid initial state: the failure
    /// is logged and the store starts empty.
    pub fn open(data_path: impl Into<PathBuf>) -> Self {
        let data_path = data_path.into();
        let people = match codec::load(&data_path) {
            Ok(people) => {
                info!(
                    "event=store_open module=repo status=ok records={}",
                    people.len()
                );
                people
            }
            Err(err) => {
                warn!(
                    "event=store_open module=repo status=empty path={} error={err}",
                    data_path.display()
                );
                Vec::new()
            }
        };

        Self {
            data_path,
            people: RwLock::new(people),
        }
    }

    // A poisoned lock still holds the last consistent record set, so
    // recover the inner value instead of propagating the panic.
    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<Person>> {
        self.people.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<Person>> {
        self.people.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rewrites the whole data file from the given set.
    ///
    /// A failed save is logged once and not retried; memory remains
    /// authoritative until the next successful mutation.
    fn persist(&self, people: &[Person]) {
        if let Err(err) = codec::save(people, &self.data_path) {
            error!(
                "event=store_save module=repo status=error path={} records={} error={err}",
                self.data_path.display(),
                people.len()
            );
        }
    }
}

impl PersonRepository for CsvPersonRepository {
    fn get_all(&self) -> Vec<Person> {
        self.read_guard().clone()
    }

    fn filter_by_gender(&self, gender: Gender) -> Vec<Person> {
        query::filter_by_gender(&self.read_guard(), gender)
    }

    fn oldest(&self) -> Option<Person> {
        query::oldest(&self.read_guard()).cloned()
    }

    fn around_year(&self, year: i32) -> QueryResult<Vec<Person>> {
        query::around_year(&self.read_guard(), year)
    }

    fn create(&self, input: NewPerson) -> PersonId {
        let id = Uuid::new_v4();
        let person = input.into_person(id);

        let mut people = self.write_guard();
        people.push(person);
        self.persist(&people);

        info!("event=store_create module=repo status=ok id={id}");
        id
    }

    fn update(&self, person: &Person) -> MutationOutcome {
        let mut people = self.write_guard();
        let Some(slot) = people.iter_mut().find(|p| p.id == person.id) else {
            warn!(
                "event=store_update module=repo status=not_found id={}",
                person.id
            );
            return MutationOutcome::NotFound;
        };

        *slot = person.clone();
        self.persist(&people);

        info!("event=store_update module=repo status=ok id={}", person.id);
        MutationOutcome::Applied
    }

    fn delete(&self, id: PersonId) -> MutationOutcome {
        let mut people = self.write_guard();
        let outcome = match people.iter().position(|p| p.id == id) {
            Some(index) => {
                people.remove(index);
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        };

        // Delete re-saves unconditionally, even when nothing was removed.
        self.persist(&people);

        info!("event=store_delete module=repo status={outcome:?} id={id}");
        outcome
    }

    fn export_spreadsheet(&self) -> ExportResult<Vec<u8>> {
        export::to_xlsx(&self.read_guard())
    }
}
