//! # Company Source Port
//!
//! Contract for collaborators that supply company records, and the column
//! names every tabular source is expected to expose.

use thiserror::Error;

use crate::company::CompanyRecord;

pub const COMPANY_NAME: &str = "Company Name";
pub const FOUNDED_YEAR: &str = "Founded Year";
pub const TOTAL_EMPLOYEES: &str = "Total Employees";
pub const HEADQUARTERS: &str = "Headquarters";
pub const INDUSTRY: &str = "Industry";
pub const DESCRIPTION: &str = "Description";
pub const EMPLOYEE_LOCATIONS: &str = "Employee Locations";
pub const GROWTH_2Y: &str = "Employee Growth 2Y (%)";
pub const GROWTH_1Y: &str = "Employee Growth 1Y (%)";
pub const GROWTH_6M: &str = "Employee Growth 6M (%)";

/// A source row that could not be turned into a [`CompanyRecord`].
#[derive(Debug, Error, PartialEq)]
#[error("row {row}: {kind}")]
pub struct RecordError {
    /// 1-based data row, not counting the header.
    pub row: usize,
    pub kind: RecordErrorKind,
}

#[derive(Debug, Error, PartialEq)]
pub enum RecordErrorKind {
    #[error("missing value for '{0}'")]
    MissingField(&'static str),
    #[error("'{field}' is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("row could not be read: {0}")]
    Unreadable(String),
}

pub type SourceRow = Result<CompanyRecord, RecordError>;

/// Supplies records in source order.
///
/// A failure to open or read the source as a whole is an `Err`; a single bad
/// row is reported in place so the batch can decide what to do with it.
pub trait CompanySource {
    fn load(&self) -> anyhow::Result<Vec<SourceRow>>;
}
