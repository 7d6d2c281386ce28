use std::path::Path;

use colored::*;

use crate::sprint;
use crate::terminal::{colors, format, print};
use screener_common::company::CompanyRecord;
use screener_common::source::{CompanySource, SourceRow};
use screener_core::heuristics::HeuristicSet;
use screener_core::tabular::CsvCompanySource;
use tracing::warn;

/// Offline audit of the heuristic predicates. Needs no credential.
pub fn heuristics(input: &Path) -> anyhow::Result<()> {
    let rows: Vec<SourceRow> = CsvCompanySource::new(input).load()?;
    let set = HeuristicSet::for_current_year();

    let mut records: Vec<CompanyRecord> = Vec::new();
    for row in rows {
        match row {
            Ok(record) => records.push(record),
            Err(err) => warn!("Skipping record, {err}"),
        }
    }

    if records.is_empty() {
        print::header("no valid records");
        print::no_results();
        return Ok(());
    }

    print::header(&format!("heuristics as of {}", set.current_year()));

    let mut passed: usize = 0;
    for (idx, record) in records.iter().enumerate() {
        let report = set.evaluate(record);
        if report.passed() {
            passed += 1;
        }
        print::tree_head(idx, &record.name);
        print::as_tree_one_level(format::heuristics_to_details(&report));
        if idx + 1 != records.len() {
            sprint!();
        }
    }

    let passed: ColoredString = passed.to_string().color(colors::PASS).bold();
    let total: ColoredString = records.len().to_string().bold();
    print::fat_separator();
    print::centerln(&format!("{passed} of {total} companies pass every heuristic"));
    Ok(())
}
