//! An [`AnalysisProvider`] backed by an OpenAI-compatible chat-completions
//! endpoint using strict structured outputs.
//!
//! Every failure (transport, status, refusal, schema mismatch) is reported as
//! an [`AnalysisError`]; the fallback is applied by [`super::AnalysisPort`].

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use screener_common::analysis::{AnalysisError, AnalysisProvider, AnalysisRequest, AnalysisVerdict};
use screener_common::config::{ApiKey, ProviderConfig};

const COMPLETIONS_PATH: &str = "v1/chat/completions";
const SCHEMA_NAME: &str = "company_analysis";
const MAX_ERROR_BODY_CHARS: usize = 200;
const ANALYST_PERSONA: &str = "You are a venture capital analyst expert at analyzing technology \
companies. Provide analysis in structured JSON format.";

#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    endpoint: Url,
    api_key: ApiKey,
    model: String,
}

impl OpenAiProvider {
    pub fn new(cfg: &ProviderConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .context("failed to build analysis provider client")?;

        let mut base = cfg.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let endpoint = Url::parse(&base)
            .and_then(|base| base.join(COMPLETIONS_PATH))
            .with_context(|| format!("invalid analysis provider base URL: {}", cfg.base_url))?;

        Ok(Self {
            client,
            endpoint,
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
        })
    }

    fn build_request<'a>(&'a self, request: &AnalysisRequest) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "system",
                content: format!("{ANALYST_PERSONA}\n{}", company_prompt(request)),
            }],
            response_format: json!({
                "type": "json_schema",
                "json_schema": {
                    "name": SCHEMA_NAME,
                    "strict": true,
                    "schema": verdict_schema(),
                }
            }),
        }
    }
}

#[async_trait]
impl AnalysisProvider for OpenAiProvider {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisVerdict, AnalysisError> {
        debug!(company = %request.company_name, model = %self.model, "requesting analysis");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.expose())
            .json(&self.build_request(request))
            .send()
            .await
            .map_err(|err| AnalysisError::Transport(err.into()))?;

        let status = response.status();
        if !status.is_success() {
            let body: String = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|err| AnalysisError::Malformed(err.to_string()))?;

        parse_completion(completion)
    }
}

fn company_prompt(request: &AnalysisRequest) -> String {
    format!(
        "Analyze this company and provide structured insights:\n\
         Company: {}\n\
         Industry: {}\n\
         Description: {}",
        request.company_name, request.industry, request.description
    )
}

fn parse_completion(completion: ChatResponse) -> Result<AnalysisVerdict, AnalysisError> {
    let message = completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| AnalysisError::Malformed("response contained no choices".into()))?;

    if let Some(refusal) = message.refusal {
        return Err(AnalysisError::Refused(refusal));
    }

    let content = message
        .content
        .ok_or_else(|| AnalysisError::Malformed("response message has no content".into()))?;

    serde_json::from_str(&content).map_err(|err| AnalysisError::Malformed(err.to_string()))
}

/// JSON schema of [`AnalysisVerdict`] in the strict structured-output dialect.
fn verdict_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "is_saas": { "type": "boolean" },
            "growth_potential": { "type": "integer" },
            "risk_level": { "type": "integer" },
            "key_strengths": { "type": "array", "items": { "type": "string" } },
            "concerns": { "type": "array", "items": { "type": "string" } },
            "target_market": { "type": "string" },
            "competitive_advantage": { "type": "string" }
        },
        "required": [
            "is_saas",
            "growth_potential",
            "risk_level",
            "key_strengths",
            "concerns",
            "target_market",
            "competitive_advantage"
        ],
        "additionalProperties": false
    })
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}
