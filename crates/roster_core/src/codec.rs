//! Flat-file codec for the person data set.
//!
//! # Responsibility
//! - Translate between in-memory `Person` sequences and the persisted
//!   CSV form (one header row, one record per row).
//! - Replace the target file atomically on save.
//!
//! # Invariants
//! - `load(save(people)) == people`, field for field, order preserved.
//! - Saving the same sequence twice produces byte-identical files.
//! - A partially written file is never observable to a later `load`.

use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tempfile::NamedTempFile;

/// Persisted column header, matching the serde field names of `Person`.
const HEADER: [&str; 8] = [
    "Id",
    "FirstName",
    "LastName",
    "Gender",
    "DateOfBirth",
    "PhoneNumber",
    "BirthPlace",
    "IsGraduated",
];

pub type CodecResult<T> = Result<T, CodecError>;

/// Failure while reading or writing the persisted flat file.
///
/// Every variant is recoverable from the store's point of view: a load
/// failure degrades to an empty data set, a save failure leaves the
/// in-memory state authoritative.
#[derive(Debug)]
pub enum CodecError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Csv(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for CodecError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Parses the persisted file into an ordered person sequence.
///
/// # Errors
/// - Returns an error when the file is absent, unreadable, or malformed.
///   The caller decides whether that is fatal; the store treats it as
///   "no data".
pub fn load(path: impl AsRef<Path>) -> CodecResult<Vec<Person>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut people = Vec::new();
    for record in reader.deserialize() {
        people.push(record?);
    }
    Ok(people)
}

/// Writes the full sequence, replacing the prior file contents.
///
/// The rows are serialized into a temp file in the destination directory
/// which is then renamed over the target, so a reader only ever sees the
/// previous complete file or the new complete file.
///
/// # Errors
/// - Returns an error when the temp file cannot be created, written, or
///   renamed into place. The target file is left untouched in that case.
pub fn save(people: &[Person], path: impl AsRef<Path>) -> CodecResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::Writer::from_writer(tmp.as_file());
        if people.is_empty() {
            // `serialize` emits the header lazily with the first record,
            // so an empty set needs it written by hand or the file loses
            // its header row.
            writer.write_record(HEADER)?;
        }
        for person in people {
            writer.serialize(person)?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|err| CodecError::Io(err.error))?;
    Ok(())
}
