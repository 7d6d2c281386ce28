//! # Company Record Model
//!
//! The immutable input handed to the decision engine, one per data-source row.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

/// A single company as read from the data source.
///
/// The engine only ever borrows records; nothing downstream mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRecord {
    pub name: String,
    pub industry: String,
    pub description: String,
    pub founded_year: i32,
    pub total_employees: u32,
    pub headquarters: String,
    pub employee_locations: EmployeeLocations,
    pub growth: GrowthRates,
}

/// Employee growth percentages over three measurement windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRates {
    /// Absent for companies younger than two years.
    pub two_year: Option<f64>,
    pub one_year: f64,
    pub six_month: f64,
}

impl GrowthRates {
    pub fn new(two_year: Option<f64>, one_year: f64, six_month: f64) -> Self {
        Self {
            two_year,
            one_year,
            six_month,
        }
    }

    /// Normalizes all three windows to a one-year base: `[2y / 2, 1y, 6m * 2]`.
    ///
    /// Returns `None` when the 2-year figure is missing.
    pub fn annualized(&self) -> Option<[f64; 3]> {
        self.two_year
            .map(|two_year| [two_year / 2.0, self.one_year, self.six_month * 2.0])
    }
}

/// The raw region → headcount text, e.g. `{'USA': 30, 'Canada': 10}`.
///
/// Kept verbatim and parsed on demand so that a malformed value never
/// prevents the record itself from being loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeLocations(String);

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("malformed employee location text: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("employee count for region '{0}' is not a number")]
    NonNumeric(String),
    #[error("employee location distribution has no employees")]
    Empty,
}

impl EmployeeLocations {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Parses the single-quoted mapping by rewriting it as JSON.
    pub fn parse(&self) -> Result<BTreeMap<String, f64>, LocationError> {
        let json: String = self.0.replace('\'', "\"");
        let regions: Map<String, Value> = serde_json::from_str(&json)?;

        regions
            .into_iter()
            .map(|(region, count)| match count.as_f64() {
                Some(count) => Ok((region, count)),
                None => Err(LocationError::NonNumeric(region)),
            })
            .collect()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
