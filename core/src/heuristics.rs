//! # Heuristic Predicates
//!
//! Deterministic, locally computable eligibility checks over a single
//! [`CompanyRecord`]. Each predicate is pure and independent of the others;
//! [`HeuristicSet::evaluate`] runs all of them and keeps every outcome for
//! the audit trail.

use chrono::{Datelike, Local};
use screener_common::classification::HeuristicReport;
use screener_common::company::{CompanyRecord, EmployeeLocations, LocationError};

use crate::growth;

const MAX_COMPANY_AGE: i32 = 5;
const MIN_EMPLOYEES: u32 = 20;
const MAX_EMPLOYEES: u32 = 60;
const NORTH_AMERICA: [&str; 2] = ["USA", "Canada"];

/// The heuristic half of the thesis, pinned to a reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicSet {
    current_year: i32,
}

impl HeuristicSet {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Uses the local calendar year.
    pub fn for_current_year() -> Self {
        Self::new(Local::now().year())
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn evaluate(&self, record: &CompanyRecord) -> HeuristicReport {
        HeuristicReport {
            recently_founded: self.is_recently_founded(record.founded_year),
            valid_employee_count: has_valid_employee_count(record.total_employees),
            north_american_hq: is_north_american_hq(&record.headquarters),
            mostly_north_american: is_mostly_north_american(&record.employee_locations),
            stable_growth: growth::is_stable(&record.growth),
        }
    }

    /// Founded no more than five years before the reference year.
    ///
    /// Widened to `i64` so extreme years cannot overflow.
    pub fn is_recently_founded(&self, founded_year: i32) -> bool {
        i64::from(self.current_year) - i64::from(founded_year) <= i64::from(MAX_COMPANY_AGE)
    }
}

pub fn has_valid_employee_count(total_employees: u32) -> bool {
    (MIN_EMPLOYEES..=MAX_EMPLOYEES).contains(&total_employees)
}

/// Case-sensitive substring match, so "Toronto, Canada" passes and "usa" does not.
pub fn is_north_american_hq(headquarters: &str) -> bool {
    NORTH_AMERICA
        .iter()
        .any(|country| headquarters.contains(country))
}

/// More than half of all listed employees work in the USA or Canada.
///
/// Fails closed: any distribution that cannot be measured counts as `false`.
pub fn is_mostly_north_american(locations: &EmployeeLocations) -> bool {
    north_american_share(locations).is_ok_and(|share| share > 0.5)
}

/// Fraction of listed employees based in the USA or Canada.
pub fn north_american_share(locations: &EmployeeLocations) -> Result<f64, LocationError> {
    let regions = locations.parse()?;

    let total: f64 = regions.values().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(LocationError::Empty);
    }

    let north_american: f64 = NORTH_AMERICA
        .iter()
        .filter_map(|country| regions.get(*country))
        .sum();

    Ok(north_american / total)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use screener_common::company::GrowthRates;

    fn record() -> CompanyRecord {
        CompanyRecord {
            name: "Shiftboard".into(),
            industry: "HR Tech".into(),
            description: "Scheduling software for clinics".into(),
            founded_year: 2021,
            total_employees: 42,
            headquarters: "Denver, USA".into(),
            employee_locations: EmployeeLocations::new("{'USA': 35, 'Mexico': 7}"),
            growth: GrowthRates::new(Some(50.0), 30.0, 12.0),
        }
    }

    #[test]
    fn founding_window_is_inclusive() {
        let set = HeuristicSet::new(2025);
        assert!(set.is_recently_founded(2025));
        assert!(set.is_recently_founded(2020));
        assert!(!set.is_recently_founded(2019));
    }

    #[test]
    fn extreme_founding_years_do_not_overflow() {
        assert!(!HeuristicSet::new(2025).is_recently_founded(i32::MIN));
        assert!(HeuristicSet::new(2025).is_recently_founded(i32::MAX));
        assert!(!HeuristicSet::new(i32::MAX).is_recently_founded(i32::MIN));
    }

    #[test]
    fn employee_bounds_are_exact() {
        assert!(has_valid_employee_count(20));
        assert!(!has_valid_employee_count(19));
        assert!(has_valid_employee_count(60));
        assert!(!has_valid_employee_count(61));
        assert!(!has_valid_employee_count(0));
    }

    #[test]
    fn headquarters_match_is_a_case_sensitive_substring() {
        assert!(is_north_american_hq("San Francisco, USA"));
        assert!(is_north_american_hq("Toronto, Canada"));
        assert!(!is_north_american_hq("Berlin, Germany"));
        assert!(!is_north_american_hq("Boston, usa"));
        assert!(!is_north_american_hq(""));
    }

    #[test]
    fn majority_share_is_strict() {
        let mixed = EmployeeLocations::new("{'USA': 30, 'Canada': 10, 'UK': 50}");
        let share = north_american_share(&mixed).unwrap();
        assert!((share - 40.0 / 90.0).abs() < 1e-12);
        assert!(!is_mostly_north_american(&mixed));

        assert!(is_mostly_north_american(&EmployeeLocations::new("{'USA': 60, 'UK': 40}")));
        assert!(!is_mostly_north_american(&EmployeeLocations::new("{'USA': 50, 'UK': 50}")));
        assert!(is_mostly_north_american(&EmployeeLocations::new("{'Canada': 12}")));
    }

    #[test]
    fn unmeasurable_distributions_fail_closed() {
        for raw in ["not a mapping", "", "{}", "{'USA': 0, 'UK': 0}", "{'USA': 'many'}", "[1, 2]"] {
            assert!(
                !is_mostly_north_american(&EmployeeLocations::new(raw)),
                "expected fail-closed for {raw:?}"
            );
        }
        assert!(matches!(
            north_american_share(&EmployeeLocations::new("{}")),
            Err(LocationError::Empty)
        ));
    }

    #[test]
    fn evaluate_reports_every_predicate() {
        let set = HeuristicSet::new(2025);
        let report = set.evaluate(&record());
        assert!(report.passed());

        let mut old_and_large = record();
        old_and_large.founded_year = 2010;
        old_and_large.total_employees = 400;
        let report = set.evaluate(&old_and_large);

        assert!(!report.recently_founded);
        assert!(!report.valid_employee_count);
        assert!(report.north_american_hq);
        assert!(report.mostly_north_american);
        assert!(report.stable_growth);
        assert!(!report.passed());
    }
}
