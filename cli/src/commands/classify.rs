use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::{Instrument, info, info_span};

use crate::sprint;
use crate::terminal::{colors, format, print, progress};
use screener_common::classification::BatchSummary;
use screener_common::config::Config;
use screener_common::sink::ResultSink;
use screener_common::source::{CompanySource, SourceRow};
use screener_core::analysis::AnalysisPort;
use screener_core::analysis::openai::OpenAiProvider;
use screener_core::batch::{BatchReport, BatchRunner};
use screener_core::engine::ClassificationEngine;
use screener_core::heuristics::HeuristicSet;
use screener_core::tabular::{CsvCompanySource, CsvResultSink};

use super::ClassifyArgs;

pub async fn classify(args: ClassifyArgs, mut cfg: Config) -> anyhow::Result<()> {
    if let Some(model) = args.model {
        cfg.provider.model = model;
    }
    if let Some(concurrency) = args.concurrency {
        cfg.concurrency = concurrency;
    }

    let source = CsvCompanySource::new(&args.input);
    let rows: Vec<SourceRow> = source.load()?;
    info!("Loaded {} rows from {}", rows.len(), args.input.display());

    let provider = OpenAiProvider::new(&cfg.provider)?;
    let engine = ClassificationEngine::new(
        HeuristicSet::for_current_year(),
        AnalysisPort::new(Arc::new(provider)),
    );

    let valid: usize = rows.iter().filter(|row| row.is_ok()).count();
    let span = info_span!("classification", indicatif.pb_show = true);
    progress::attach_bar(&span, "classifying", valid);

    let runner = BatchRunner::new(engine)
        .with_concurrency(cfg.concurrency)
        .with_progress(progress::advance_on(span.clone()));

    let start_time: Instant = Instant::now();
    let report: BatchReport = runner.run(rows).instrument(span).await;

    let mut sink = CsvResultSink::create(&args.output)?;
    sink.write(&report.results)
        .with_context(|| format!("failed to write results to {}", args.output.display()))?;
    info!("Results written to {}", args.output.display());

    classification_ends(&report, start_time.elapsed());
    Ok(())
}

fn classification_ends(report: &BatchReport, total_time: Duration) {
    sprint!();
    print::header("Classification Results");
    print_summary(&report.summary);

    if report.summary.interesting == 0 {
        print::header("no interesting companies");
        print::no_results();
    } else {
        sprint!();
        print::header("Interesting Companies");
        print_interesting(report);
    }

    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Screening complete in {elapsed}").color(colors::TEXT_DEFAULT);
    print::fat_separator();
    print::centerln(&output.to_string());
}

fn print_summary(summary: &BatchSummary) {
    print::aligned_line("Total companies analyzed", summary.total.to_string().normal());
    print::aligned_line(
        "Interesting companies",
        summary.interesting.to_string().color(colors::PASS).bold(),
    );
    print::aligned_line("Percentage interesting", summary.percentage().normal());
    if summary.skipped > 0 {
        print::aligned_line(
            "Skipped records",
            summary.skipped.to_string().color(colors::FAIL),
        );
    }
}

fn print_interesting(report: &BatchReport) {
    let interesting: Vec<_> = report.interesting().collect();
    for (idx, result) in interesting.iter().enumerate() {
        print::tree_head(idx, &format!("{} ({})", result.company_name(), result.industry()));
        print::as_tree_one_level(format::result_to_details(result));
        if idx + 1 != interesting.len() {
            sprint!();
        }
    }
}
