//! Spreadsheet export of the current record set.
//!
//! # Responsibility
//! - Render a snapshot into a self-contained xlsx byte payload: one
//!   header row plus one row per record, fixed column order.
//!
//! # Invariants
//! - Export succeeds on an empty snapshot (header row only).
//! - The date-of-birth column is rendered day/month/year.

use crate::model::person::Person;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SHEET_NAME: &str = "Persons";
const DATE_OF_BIRTH_FORMAT: &str = "%d/%m/%Y";

/// Export column order; also the header row.
pub const COLUMNS: [&str; 7] = [
    "First Name",
    "Last Name",
    "Gender",
    "Date Of Birth",
    "Phone Number",
    "Birth Place",
    "Is Graduated",
];

pub type ExportResult<T> = Result<T, ExportError>;

/// Failure while assembling the spreadsheet payload.
#[derive(Debug)]
pub enum ExportError {
    Xlsx(XlsxError),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xlsx(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Xlsx(err) => Some(err),
        }
    }
}

impl From<XlsxError> for ExportError {
    fn from(value: XlsxError) -> Self {
        Self::Xlsx(value)
    }
}

/// Cell values for one record, in `COLUMNS` order.
pub fn person_row(person: &Person) -> [String; 7] {
    [
        person.first_name.clone(),
        person.last_name.clone(),
        person.gender.to_string(),
        person
            .date_of_birth
            .format(DATE_OF_BIRTH_FORMAT)
            .to_string(),
        person.phone_number.clone(),
        person.birth_place.clone(),
        person.is_graduated.to_string(),
    ]
}

/// Renders the snapshot into an in-memory xlsx workbook.
///
/// No file handle is left open; the caller owns the returned bytes.
///
/// # Errors
/// - `ExportError::Xlsx` when the workbook writer rejects a cell or
///   fails to assemble the payload.
pub fn to_xlsx(snapshot: &[Person]) -> ExportResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *title)?;
    }

    for (index, person) in snapshot.iter().enumerate() {
        let row = index as u32 + 1;
        for (col, cell) in person_row(person).iter().enumerate() {
            worksheet.write_string(row, col as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
