//! # Batch Runner
//!
//! Drives the [`ClassificationEngine`] over a whole collection.
//!
//! Records that failed to load are skipped with a warning and counted. The
//! rest are classified with up to `concurrency` provider calls in flight. A
//! finished call frees its slot immediately, so one slow record never holds
//! back the ones after it; results are put back into source order at the end.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::stream::{self, StreamExt};
use screener_common::classification::{BatchSummary, ClassificationResult};
use screener_common::company::CompanyRecord;
use screener_common::source::SourceRow;
use tracing::{info, warn};

use crate::engine::ClassificationEngine;

/// Invoked with the number of completed classifications after each one finishes.
pub type ProgressCallback = Box<dyn Fn(usize) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One result per valid record, in source order.
    pub results: Vec<ClassificationResult>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn interesting(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.results.iter().filter(|result| result.interesting())
    }
}

pub struct BatchRunner {
    engine: ClassificationEngine,
    concurrency: NonZeroUsize,
    on_progress: Option<ProgressCallback>,
}

impl BatchRunner {
    pub fn new(engine: ClassificationEngine) -> Self {
        Self {
            engine,
            concurrency: NonZeroUsize::MIN,
            on_progress: None,
        }
    }

    pub fn with_concurrency(mut self, concurrency: NonZeroUsize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    pub async fn run<I>(&self, rows: I) -> BatchReport
    where
        I: IntoIterator<Item = SourceRow>,
    {
        let (records, skipped) = partition_rows(rows);

        let engine: &ClassificationEngine = &self.engine;
        let on_progress: &Option<ProgressCallback> = &self.on_progress;
        let completed = &AtomicUsize::new(0);

        let mut indexed: Vec<(usize, ClassificationResult)> = stream::iter(records.iter().enumerate())
            .map(move |(index, record)| async move {
                let result = engine.classify(record).await;
                let done: usize = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(callback) = on_progress {
                    callback(done);
                }
                (index, result)
            })
            .buffer_unordered(self.concurrency.get())
            .collect()
            .await;

        indexed.sort_unstable_by_key(|(index, _)| *index);
        let results: Vec<ClassificationResult> = indexed.into_iter().map(|(_, result)| result).collect();

        let summary = BatchSummary::from_results(&results, skipped);
        info!(
            total = summary.total,
            interesting = summary.interesting,
            skipped = summary.skipped,
            "batch complete"
        );

        BatchReport { results, summary }
    }
}

/// Splits loaded rows into valid records and a count of skipped ones.
fn partition_rows<I>(rows: I) -> (Vec<CompanyRecord>, usize)
where
    I: IntoIterator<Item = SourceRow>,
{
    let mut records: Vec<CompanyRecord> = Vec::new();
    let mut skipped: usize = 0;

    for row in rows {
        match row {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!("Skipping record, {err}");
                skipped += 1;
            }
        }
    }

    (records, skipped)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
