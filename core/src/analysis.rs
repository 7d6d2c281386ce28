//! # External Analysis Port
//!
//! [`AnalysisPort`] is the only way the engine talks to an analysis provider.
//! It owns failure containment: one provider attempt, no retries, and the
//! fail-closed [`AnalysisVerdict::fallback`] whenever that attempt does not
//! produce a valid verdict. Callers therefore never see an error.

use std::sync::Arc;

use screener_common::analysis::{
    AnalysisError, AnalysisOutcome, AnalysisProvider, AnalysisRequest, AnalysisVerdict,
};
use tracing::{debug, warn};

pub mod openai;

#[derive(Clone)]
pub struct AnalysisPort {
    provider: Arc<dyn AnalysisProvider>,
}

impl AnalysisPort {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { provider }
    }

    /// Returns the provider's verdict, or a failed outcome carrying the
    /// fallback if the call failed or the verdict broke the score invariant.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        match self.try_analyze(request).await {
            Ok(verdict) => {
                debug!(company = %request.company_name, "analysis received");
                AnalysisOutcome::received(verdict)
            }
            Err(err) => {
                warn!("Analysis failed for {}: {err}", request.company_name);
                AnalysisOutcome::failed()
            }
        }
    }

    async fn try_analyze(&self, request: &AnalysisRequest) -> Result<AnalysisVerdict, AnalysisError> {
        let verdict: AnalysisVerdict = self.provider.analyze(request).await?;
        verdict.validate()?;
        Ok(verdict)
    }
}
