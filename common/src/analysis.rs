//! # External Analysis Model
//!
//! The qualitative verdict returned by the external analysis collaborator and
//! the port ([`AnalysisProvider`]) through which it is requested.
//!
//! Providers are fallible. Failure containment and the fail-closed fallback
//! live one layer up, in the core crate's analysis port, so that the engine
//! only ever sees a defined [`AnalysisVerdict`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::company::CompanyRecord;

/// Highest value either score may take.
pub const SCORE_CEILING: u8 = 10;
/// Growth potential at or above this passes the thesis.
pub const MIN_GROWTH_POTENTIAL: u8 = 7;
/// Risk at or below this passes the thesis.
pub const MAX_RISK_LEVEL: u8 = 6;

const FAILED_PLACEHOLDER: &str = "Analysis failed";
const UNKNOWN_PLACEHOLDER: &str = "Unknown";

/// The (name, description, industry) triplet sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub company_name: String,
    pub description: String,
    pub industry: String,
}

impl AnalysisRequest {
    pub fn new(
        company_name: impl Into<String>,
        description: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            description: description.into(),
            industry: industry.into(),
        }
    }
}

impl From<&CompanyRecord> for AnalysisRequest {
    fn from(record: &CompanyRecord) -> Self {
        Self::new(&record.name, &record.description, &record.industry)
    }
}

/// Structured qualitative assessment of one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisVerdict {
    pub is_saas: bool,
    /// 0..=10, higher is better.
    pub growth_potential: u8,
    /// 0..=10, higher is worse.
    pub risk_level: u8,
    pub key_strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub target_market: String,
    pub competitive_advantage: String,
}

impl AnalysisVerdict {
    /// The fail-closed sentinel substituted whenever a provider cannot deliver.
    pub fn fallback() -> Self {
        Self {
            is_saas: false,
            growth_potential: 0,
            risk_level: SCORE_CEILING,
            key_strengths: vec![FAILED_PLACEHOLDER.to_string()],
            concerns: vec![FAILED_PLACEHOLDER.to_string()],
            target_market: UNKNOWN_PLACEHOLDER.to_string(),
            competitive_advantage: UNKNOWN_PLACEHOLDER.to_string(),
        }
    }

    /// Checks the score invariant.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for (field, value) in [
            ("growth_potential", self.growth_potential),
            ("risk_level", self.risk_level),
        ] {
            if value > SCORE_CEILING {
                return Err(AnalysisError::OutOfRange { field, value });
            }
        }
        Ok(())
    }

    /// External criteria: a SaaS business with high growth potential and tolerable risk.
    pub fn meets_thesis(&self) -> bool {
        self.is_saas
            && self.growth_potential >= MIN_GROWTH_POTENTIAL
            && self.risk_level <= MAX_RISK_LEVEL
    }
}

/// The port's answer for one company: a verdict, and whether that verdict is
/// the fallback standing in for a failed provider call.
///
/// The flag is set where the failure happens, so a genuine verdict that
/// happens to equal the fallback is never reported as a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    verdict: AnalysisVerdict,
    failed: bool,
}

impl AnalysisOutcome {
    pub fn received(verdict: AnalysisVerdict) -> Self {
        Self { verdict, failed: false }
    }

    pub fn failed() -> Self {
        Self {
            verdict: AnalysisVerdict::fallback(),
            failed: true,
        }
    }

    pub fn verdict(&self) -> &AnalysisVerdict {
        &self.verdict
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("provider request failed: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("provider refused to analyze the company: {0}")]
    Refused(String),
    #[error("provider response did not match the verdict schema: {0}")]
    Malformed(String),
    #[error("{field} score {value} is outside 0..=10")]
    OutOfRange { field: &'static str, value: u8 },
}

/// Contract for collaborators that turn unstructured company text into a verdict.
///
/// Implementations make exactly one attempt per call and report every failure
/// as an [`AnalysisError`]; they never substitute defaults themselves.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisVerdict, AnalysisError>;
}
