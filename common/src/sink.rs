//! # Result Sink Port

use crate::classification::ClassificationResult;

pub const OUTPUT_COLUMNS: [&str; 12] = [
    "Company Name",
    "Founded Year",
    "Total Employees",
    "Headquarters",
    "Industry",
    "Growth Potential",
    "Risk Level",
    "Key Strengths",
    "Concerns",
    "Target Market",
    "Competitive Advantage",
    "Interesting",
];

/// Persists classification results, one row per result, in the order given.
pub trait ResultSink {
    fn write(&mut self, results: &[ClassificationResult]) -> anyhow::Result<()>;
}
