use crate::Language;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{env, time::Duration};

/// Per-user AI settings, supplied with every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AIConfig {
    /// `gemini`, `openai` or `anthropic`. Anything else routes to Gemini.
    pub provider: String,
    /// May be empty.
    pub api_key: String,
    /// Empty selects the provider's default model.
    pub model: String,
    pub language: Language,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            api_key: String::new(),
            model: String::new(),
            language: Language::EnUs,
        }
    }
}

impl AIConfig {
    /// Settings the coach widget starts with before the user saves their own.
    #[must_use]
    pub fn coach_defaults() -> Self {
        Self {
            provider: "gemini".to_string(),
            api_key: String::new(),
            model: lifehub_llm::google::DEFAULT_MODEL.to_string(),
            language: Language::PtBr,
        }
    }
}

/// Deployment wide settings of the gateway.
///
/// # Default Values
/// - `fallback_api_key`: `None`
/// - `timeout`: 30 seconds
/// - base URLs: the public endpoints of each provider
/// - `today`: `None` (the UTC date at call time, matching how the dashboard
///   keys its daily records)
#[derive(Debug, Clone)]
pub struct GatewayOptions {
    /// Key used for Gemini when the caller supplies none.
    pub fallback_api_key: Option<String>,
    /// Upper bound on a single provider call.
    pub timeout: Duration,
    pub gemini_base_url: Option<String>,
    pub openai_base_url: Option<String>,
    pub anthropic_base_url: Option<String>,
    /// Pins the date used to pick daily records in the context. Defaults to
    /// the current UTC date.
    pub today: Option<NaiveDate>,
}

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            fallback_api_key: None,
            timeout: DEFAULT_TIMEOUT,
            gemini_base_url: None,
            openai_base_url: None,
            anthropic_base_url: None,
            today: None,
        }
    }
}

impl GatewayOptions {
    /// Read options from the environment, loading a `.env` file first when
    /// one exists.
    ///
    /// - `LIFEHUB_FALLBACK_API_KEY`, then `GEMINI_API_KEY`, then `API_KEY`
    /// - `LIFEHUB_AI_TIMEOUT_SECS`
    /// - `LIFEHUB_GEMINI_BASE_URL`, `LIFEHUB_OPENAI_BASE_URL`,
    ///   `LIFEHUB_ANTHROPIC_BASE_URL`
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build options from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let fallback_api_key = var("LIFEHUB_FALLBACK_API_KEY")
            .or_else(|| var("GEMINI_API_KEY"))
            .or_else(|| var("API_KEY"));

        let timeout = match var("LIFEHUB_AI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "ignoring invalid LIFEHUB_AI_TIMEOUT_SECS, using the default"
                    );
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Self {
            fallback_api_key,
            timeout,
            gemini_base_url: var("LIFEHUB_GEMINI_BASE_URL"),
            openai_base_url: var("LIFEHUB_OPENAI_BASE_URL"),
            anthropic_base_url: var("LIFEHUB_ANTHROPIC_BASE_URL"),
            today: None,
        }
    }

    #[must_use]
    pub fn fallback_api_key(mut self, key: impl Into<String>) -> Self {
        self.fallback_api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}
