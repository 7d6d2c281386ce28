use crate::terminal::colors;
use colored::*;
use screener_common::analysis::SCORE_CEILING;
use screener_common::classification::{ClassificationResult, HeuristicReport};

pub type Detail = (String, ColoredString);

fn score(value: u8) -> ColoredString {
    format!("{value}/{SCORE_CEILING}").color(colors::SCORE)
}

fn verdict(passed: bool) -> ColoredString {
    if passed {
        "pass".color(colors::PASS)
    } else {
        "fail".color(colors::FAIL)
    }
}

pub fn result_to_details(result: &ClassificationResult) -> Vec<Detail> {
    vec![
        ("Growth Potential".to_string(), score(result.growth_potential())),
        ("Risk Level".to_string(), score(result.risk_level())),
        ("Key Strengths".to_string(), result.key_strengths().normal()),
        (
            "Competitive Advantage".to_string(),
            result.competitive_advantage().normal(),
        ),
    ]
}

pub fn heuristics_to_details(report: &HeuristicReport) -> Vec<Detail> {
    report
        .checks()
        .into_iter()
        .map(|(label, passed)| (label.to_string(), verdict(passed)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_details_follow_check_order() {
        let report = HeuristicReport {
            recently_founded: true,
            valid_employee_count: true,
            north_american_hq: false,
            mostly_north_american: true,
            stable_growth: false,
        };
        let labels: Vec<String> = heuristics_to_details(&report)
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["Founded", "Size", "HQ", "Staff", "Growth"]);
    }
}
