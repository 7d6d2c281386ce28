use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, anyhow};
use csv::Writer;

use screener_common::classification::ClassificationResult;
use screener_common::sink::{OUTPUT_COLUMNS, ResultSink};

/// Writes one CSV row per result under the fixed output header.
///
/// The header goes out with the first `write`; later calls append rows.
pub struct CsvResultSink<W: io::Write> {
    writer: Writer<W>,
    header_written: bool,
}

impl CsvResultSink<File> {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let writer = Writer::from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self {
            writer,
            header_written: false,
        })
    }
}

impl<W: io::Write> CsvResultSink<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: Writer::from_writer(inner),
            header_written: false,
        }
    }

    pub fn into_inner(self) -> anyhow::Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| anyhow!("failed to flush results: {}", err.error()))
    }
}

impl<W: io::Write> ResultSink for CsvResultSink<W> {
    fn write(&mut self, results: &[ClassificationResult]) -> anyhow::Result<()> {
        if !self.header_written {
            self.writer.write_record(OUTPUT_COLUMNS)?;
            self.header_written = true;
        }
        for result in results {
            self.writer
                .write_record(output_row(result))
                .with_context(|| format!("failed to write row for {}", result.company_name()))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn output_row(result: &ClassificationResult) -> [String; 12] {
    [
        result.company_name().to_string(),
        result.founded_year().to_string(),
        result.total_employees().to_string(),
        result.headquarters().to_string(),
        result.industry().to_string(),
        result.growth_potential().to_string(),
        result.risk_level().to_string(),
        result.key_strengths().to_string(),
        result.concerns().to_string(),
        result.target_market().to_string(),
        result.competitive_advantage().to_string(),
        result.interesting_label().to_string(),
    ]
}
