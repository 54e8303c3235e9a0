//! Read-only derivations over a record snapshot.
//!
//! # Responsibility
//! - Answer gender, birth-year and oldest-record queries without touching
//!   store state or persistence.
//!
//! # Invariants
//! - Every function here is pure: no I/O, no mutation, no side effects.
//! - Relative snapshot order is preserved inside each result group.

use crate::model::person::{Gender, Person};
use chrono::Datelike;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type QueryResult<T> = Result<T, QueryError>;

/// Caller/usage error for query preconditions.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    /// `around_year` requires a positive year; zero is the external
    /// layer's "no filter" sentinel and must never reach this module.
    InvalidYear(i32),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(year) => {
                write!(f, "around_year requires a positive year, got {year}")
            }
        }
    }
}

impl Error for QueryError {}

/// All records whose gender equals `gender`, in snapshot order.
pub fn filter_by_gender(snapshot: &[Person], gender: Gender) -> Vec<Person> {
    snapshot
        .iter()
        .filter(|person| person.gender == gender)
        .cloned()
        .collect()
}

/// The record with the earliest birth *year*, or `None` on an empty
/// snapshot.
///
/// The comparison is year-only on purpose: two records born in the same
/// year tie regardless of month, and the first one in snapshot order
/// wins. The strict `<` below keeps the earlier entry on a tie, which
/// `Iterator::min_by_key` (last-wins on equal keys) would not.
pub fn oldest(snapshot: &[Person]) -> Option<&Person> {
    let mut best: Option<&Person> = None;
    for person in snapshot {
        let earlier = match best {
            None => true,
            Some(current) => person.date_of_birth.year() < current.date_of_birth.year(),
        };
        if earlier {
            best = Some(person);
        }
    }
    best
}

/// Regroups the snapshot around a birth year: records born before `year`,
/// then in `year`, then after, concatenated in that order.
///
/// # Errors
/// - `QueryError::InvalidYear` when `year <= 0`.
pub fn around_year(snapshot: &[Person], year: i32) -> QueryResult<Vec<Person>> {
    if year <= 0 {
        return Err(QueryError::InvalidYear(year));
    }

    let mut before = Vec::new();
    let mut in_year = Vec::new();
    let mut after = Vec::new();
    for person in snapshot {
        match person.date_of_birth.year().cmp(&year) {
            Ordering::Less => before.push(person.clone()),
            Ordering::Equal => in_year.push(person.clone()),
            Ordering::Greater => after.push(person.clone()),
        }
    }

    before.extend(in_year);
    before.extend(after);
    Ok(before)
}
