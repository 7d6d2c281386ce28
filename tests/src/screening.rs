use std::io::Write;
use std::num::NonZeroUsize;
use std::sync::Arc;

use screener_common::sink::ResultSink;
use screener_common::source::CompanySource;
use screener_core::analysis::AnalysisPort;
use screener_core::batch::{BatchReport, BatchRunner};
use screener_core::engine::ClassificationEngine;
use screener_core::heuristics::HeuristicSet;
use screener_core::tabular::{CsvCompanySource, CsvResultSink};

use crate::util::{ScriptedProvider, company_csv, verdict};

const ROWS: [&str; 6] = [
    r#"Ledgerly,2022,35,"Austin, USA",Fintech,Bookkeeping for agencies,"{'USA': 30, 'UK': 5}",40,25,10"#,
    r#"Riskful,2022,35,"Toronto, Canada",Fintech,Crypto lending,"{'Canada': 35}",40,25,10"#,
    r#"Veteran,2001,35,"Boston, USA",SaaS,Legacy ERP,"{'USA': 35}",40,25,10"#,
    r#"Broken,,35,"Boston, USA",SaaS,No founding year,"{'USA': 35}",40,25,10"#,
    r#"Silent,2023,25,"Denver, USA",SaaS,Scheduling,"{'USA': 25}",,20,8"#,
    r#"Offshore,2023,25,"Denver, USA",SaaS,Analytics,"{'India': 20, 'USA': 5}",40,25,10"#,
];

fn provider() -> ScriptedProvider {
    ScriptedProvider::default()
        .answer("Ledgerly", verdict(true, 8, 3))
        .answer("Riskful", verdict(true, 9, 7))
        .answer("Veteran", verdict(true, 9, 2))
        .answer("Offshore", verdict(true, 8, 2))
}

async fn screen(provider: Arc<ScriptedProvider>, concurrency: usize) -> (BatchReport, String) {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "{}", company_csv(&ROWS)).unwrap();

    let rows = CsvCompanySource::new(input.path()).load().unwrap();
    let engine = ClassificationEngine::new(HeuristicSet::new(2025), AnalysisPort::new(provider));
    let report = BatchRunner::new(engine)
        .with_concurrency(NonZeroUsize::new(concurrency).unwrap())
        .run(rows)
        .await;

    let output = tempfile::NamedTempFile::new().unwrap();
    let mut sink = CsvResultSink::create(output.path()).unwrap();
    sink.write(&report.results).unwrap();
    drop(sink);

    let written = std::fs::read_to_string(output.path()).unwrap();
    (report, written)
}

#[tokio::test]
async fn end_to_end_classification() {
    let provider = Arc::new(provider());
    let (report, written) = screen(provider.clone(), 1).await;

    let labels: Vec<(&str, &str)> = report
        .results
        .iter()
        .map(|r| (r.company_name(), r.interesting_label()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("Ledgerly", "Yes"),
            ("Riskful", "No"),
            ("Veteran", "No"),
            ("Silent", "No"),
            ("Offshore", "No"),
        ]
    );

    assert_eq!(report.summary.total, 5);
    assert_eq!(report.summary.interesting, 1);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.percentage(), "20.0%");

    // The provider is consulted even when the heuristics already fail.
    assert_eq!(
        provider.calls(),
        vec!["Ledgerly", "Riskful", "Veteran", "Silent", "Offshore"]
    );

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("Company Name,Founded Year,Total Employees"));
    assert!(lines[0].ends_with("Competitive Advantage,Interesting"));
    assert_eq!(
        lines[1],
        "Ledgerly,2022,35,\"Austin, USA\",Fintech,8,3,\"Sticky product, Efficient growth\",\
Crowded market,Mid-market,Integrations,Yes"
    );
}

#[tokio::test]
async fn failed_analysis_writes_the_fallback_row() {
    let (report, written) = screen(Arc::new(provider()), 1).await;

    let silent = &report.results[3];
    assert!(silent.analysis_failed());
    assert!(silent.heuristics_passed());
    assert!(!silent.interesting());

    let row = written
        .lines()
        .find(|line| line.starts_with("Silent,"))
        .unwrap();
    assert_eq!(
        row,
        "Silent,2023,25,\"Denver, USA\",SaaS,0,10,Analysis failed,Analysis failed,Unknown,Unknown,No"
    );
}

#[tokio::test]
async fn concurrency_does_not_change_the_outcome() {
    let (sequential, sequential_csv) = screen(Arc::new(provider()), 1).await;
    let (concurrent, concurrent_csv) = screen(Arc::new(provider()), 4).await;

    assert_eq!(sequential.results, concurrent.results);
    assert_eq!(sequential.summary, concurrent.summary);
    assert_eq!(sequential_csv, concurrent_csv);
}

#[tokio::test]
async fn heuristic_failures_are_explained() {
    let (report, _) = screen(Arc::new(provider()), 2).await;

    let veteran = &report.results[2];
    assert!(!veteran.heuristics().recently_founded);
    assert!(veteran.external_passed());

    let offshore = &report.results[4];
    assert!(!offshore.heuristics().mostly_north_american);
    assert!(offshore.heuristics().north_american_hq);
}
