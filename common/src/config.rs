use std::{env, fmt, num::NonZeroUsize, time::Duration};

use thiserror::Error;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "SCREENER_MODEL";
pub const TIMEOUT_VAR: &str = "SCREENER_TIMEOUT_SECS";
pub const CONCURRENCY_VAR: &str = "SCREENER_CONCURRENCY";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-2024-08-06";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// Settings for the external analysis provider.
    pub provider: ProviderConfig,
    /// Maximum number of provider calls in flight at once.
    ///
    /// Results are always reported in source order, whatever this is set to.
    pub concurrency: NonZeroUsize,
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    pub model: String,
    /// Upper bound on a single provider call, after which it counts as failed.
    pub timeout: Duration,
}

/// Provider credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// [`ConfigError::Missing`] when `OPENAI_API_KEY` is unset or blank, and
    /// [`ConfigError::Invalid`] when an optional value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs: u64 = match lookup(TIMEOUT_VAR) {
            Some(raw) => parse_positive(TIMEOUT_VAR, &raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let concurrency = match lookup(CONCURRENCY_VAR) {
            Some(raw) => parse_positive::<usize>(CONCURRENCY_VAR, &raw)?,
            None => 1,
        };

        Ok(Self {
            provider: ProviderConfig {
                api_key: ApiKey::new(api_key),
                base_url,
                model,
                timeout: Duration::from_secs(timeout_secs),
            },
            concurrency: NonZeroUsize::new(concurrency).unwrap_or(NonZeroUsize::MIN),
        })
    }
}

fn parse_positive<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value: T = raw
        .trim()
        .parse()
        .map_err(|err: T::Err| ConfigError::Invalid {
            name,
            source: anyhow::Error::new(err),
        })?;

    if value <= T::default() {
        return Err(ConfigError::Invalid {
            name,
            source: anyhow::anyhow!("must be greater than zero, got {raw:?}"),
        });
    }
    Ok(value)
}
