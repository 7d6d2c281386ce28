//! # Classification Results
//!
//! Per-company outcomes and the batch-level summary derived from them.

use crate::analysis::AnalysisOutcome;
use crate::company::CompanyRecord;

/// Outcome of every heuristic predicate for one company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeuristicReport {
    pub recently_founded: bool,
    pub valid_employee_count: bool,
    pub north_american_hq: bool,
    pub mostly_north_american: bool,
    pub stable_growth: bool,
}

impl HeuristicReport {
    /// Heuristics pass only when every predicate holds.
    pub fn passed(&self) -> bool {
        self.checks().iter().all(|(_, passed)| *passed)
    }

    /// Labelled predicate outcomes, in evaluation order.
    pub fn checks(&self) -> [(&'static str, bool); 5] {
        [
            ("Founded", self.recently_founded),
            ("Size", self.valid_employee_count),
            ("HQ", self.north_american_hq),
            ("Staff", self.mostly_north_american),
            ("Growth", self.stable_growth),
        ]
    }
}

/// The immutable classification of one company.
///
/// Carries the echoed identity fields, the verdict rationale and the three
/// booleans that explain the final decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    company_name: String,
    founded_year: i32,
    total_employees: u32,
    headquarters: String,
    industry: String,
    growth_potential: u8,
    risk_level: u8,
    key_strengths: String,
    concerns: String,
    target_market: String,
    competitive_advantage: String,
    analysis_failed: bool,
    heuristics: HeuristicReport,
    external_passed: bool,
}

impl ClassificationResult {
    pub fn new(record: &CompanyRecord, heuristics: HeuristicReport, outcome: &AnalysisOutcome) -> Self {
        let verdict = outcome.verdict();
        Self {
            company_name: record.name.clone(),
            founded_year: record.founded_year,
            total_employees: record.total_employees,
            headquarters: record.headquarters.clone(),
            industry: record.industry.clone(),
            growth_potential: verdict.growth_potential,
            risk_level: verdict.risk_level,
            key_strengths: verdict.key_strengths.join(", "),
            concerns: verdict.concerns.join(", "),
            target_market: verdict.target_market.clone(),
            competitive_advantage: verdict.competitive_advantage.clone(),
            analysis_failed: outcome.is_failed(),
            heuristics,
            external_passed: verdict.meets_thesis(),
        }
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn founded_year(&self) -> i32 {
        self.founded_year
    }

    pub fn total_employees(&self) -> u32 {
        self.total_employees
    }

    pub fn headquarters(&self) -> &str {
        &self.headquarters
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn growth_potential(&self) -> u8 {
        self.growth_potential
    }

    pub fn risk_level(&self) -> u8 {
        self.risk_level
    }

    /// Strengths joined with `", "` in the order the provider returned them.
    pub fn key_strengths(&self) -> &str {
        &self.key_strengths
    }

    pub fn concerns(&self) -> &str {
        &self.concerns
    }

    pub fn target_market(&self) -> &str {
        &self.target_market
    }

    pub fn competitive_advantage(&self) -> &str {
        &self.competitive_advantage
    }

    /// True when the verdict is the fallback substituted for a failed provider call.
    pub fn analysis_failed(&self) -> bool {
        self.analysis_failed
    }

    pub fn heuristics(&self) -> &HeuristicReport {
        &self.heuristics
    }

    pub fn heuristics_passed(&self) -> bool {
        self.heuristics.passed()
    }

    pub fn external_passed(&self) -> bool {
        self.external_passed
    }

    pub fn interesting(&self) -> bool {
        self.heuristics_passed() && self.external_passed
    }

    pub fn interesting_label(&self) -> &'static str {
        if self.interesting() { "Yes" } else { "No" }
    }
}

/// Aggregate counts over a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Records that were classified.
    pub total: usize,
    pub interesting: usize,
    /// Records dropped before classification because a field was missing or invalid.
    pub skipped: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[ClassificationResult], skipped: usize) -> Self {
        Self {
            total: results.len(),
            interesting: results.iter().filter(|result| result.interesting()).count(),
            skipped,
        }
    }

    /// Interesting share in tenths of a percent, rounded half away from zero.
    ///
    /// Integer arithmetic keeps `.x5` boundaries exact.
    pub fn percentage_tenths(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.interesting * 2_000 + self.total) / (2 * self.total)
    }

    /// The interesting share formatted as `42.9%`.
    pub fn percentage(&self) -> String {
        let tenths: usize = self.percentage_tenths();
        format!("{}.{}%", tenths / 10, tenths % 10)
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
