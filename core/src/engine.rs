//! # Classification Engine
//!
//! Combines the heuristic predicates and the external verdict for a single
//! company under a fixed policy:
//!
//! `interesting = heuristics_passed AND external_passed`
//!
//! The external call is made for every record so the rationale columns are
//! always populated, even when the heuristics already rule a company out.

use screener_common::analysis::{AnalysisOutcome, AnalysisRequest};
use screener_common::classification::{ClassificationResult, HeuristicReport};
use screener_common::company::CompanyRecord;
use tracing::debug;

use crate::analysis::AnalysisPort;
use crate::heuristics::HeuristicSet;

#[derive(Clone)]
pub struct ClassificationEngine {
    heuristics: HeuristicSet,
    port: AnalysisPort,
}

impl ClassificationEngine {
    pub fn new(heuristics: HeuristicSet, port: AnalysisPort) -> Self {
        Self { heuristics, port }
    }

    /// Classifies one company. Never fails: provider problems surface as the
    /// fallback verdict, which can only ever reject.
    pub async fn classify(&self, record: &CompanyRecord) -> ClassificationResult {
        let report: HeuristicReport = self.heuristics.evaluate(record);
        let outcome: AnalysisOutcome = self.port.analyze(&AnalysisRequest::from(record)).await;

        let result = ClassificationResult::new(record, report, &outcome);

        debug!(
            company = %record.name,
            heuristics_passed = result.heuristics_passed(),
            external_passed = result.external_passed(),
            interesting = result.interesting(),
            "classified"
        );

        result
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
