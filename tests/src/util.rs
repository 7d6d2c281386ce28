use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use screener_common::analysis::{AnalysisError, AnalysisProvider, AnalysisRequest, AnalysisVerdict};

/// In-memory provider that answers per company name.
///
/// Companies without a scripted answer get a transport error, as if the call
/// had timed out.
#[derive(Default)]
pub struct ScriptedProvider {
    answers: HashMap<String, AnalysisVerdict>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn answer(mut self, company: &str, verdict: AnalysisVerdict) -> Self {
        self.answers.insert(company.to_string(), verdict);
        self
    }

    /// Company names in the order the provider was asked about them.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AnalysisProvider for ScriptedProvider {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisVerdict, AnalysisError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.company_name.clone());
        }
        self.answers
            .get(&request.company_name)
            .cloned()
            .ok_or_else(|| AnalysisError::Transport(anyhow::anyhow!("no scripted answer")))
    }
}

pub fn verdict(is_saas: bool, growth_potential: u8, risk_level: u8) -> AnalysisVerdict {
    AnalysisVerdict {
        is_saas,
        growth_potential,
        risk_level,
        key_strengths: vec!["Sticky product".into(), "Efficient growth".into()],
        concerns: vec!["Crowded market".into()],
        target_market: "Mid-market".into(),
        competitive_advantage: "Integrations".into(),
    }
}

pub const HEADER: &str = "Company Name,Founded Year,Total Employees,Headquarters,Industry,\
Description,Employee Locations,Employee Growth 2Y (%),Employee Growth 1Y (%),Employee Growth 6M (%)";

pub fn company_csv(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}
