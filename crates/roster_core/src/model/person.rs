//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical person record owned by the repository store.
//! - Keep the serde field layout aligned with the persisted CSV header.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - `full_name` is derived on read, never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every person managed by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = Uuid;

/// Closed gender set of the record model.
///
/// There is no "unspecified" state; the persisted form is the variant
/// name as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Canonical person record.
///
/// Field names serialize in PascalCase so the flat-file header reads
/// `Id,FirstName,LastName,...` like the data files the store inherits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    /// Stable global ID, assigned once by the store at creation.
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    /// Calendar date only; no time-of-day semantics.
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub birth_place: String,
    pub is_graduated: bool,
}

impl Person {
    /// Derived display name, `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create-time input: every `Person` field except the store-assigned `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub birth_place: String,
    pub is_graduated: bool,
}

impl NewPerson {
    /// Attaches a store-assigned identity to the draft record.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this person's lifetime.
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            birth_place: self.birth_place,
            is_graduated: self.is_graduated,
        }
    }
}
