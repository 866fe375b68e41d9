use crate::{
    build_context,
    opentelemetry::{InsightOutcome, InsightSpan},
    resolve_credential, AIConfig, Credential, GatewayOptions, HttpModelFactory, InsightError,
    ModelFactory, ProviderKind, WidgetSnapshot,
};
use lifehub_llm::{LanguageModelError, LanguageModelInput};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Returned when the provider answered without any text.
pub const NO_RESPONSE: &str = "No response.";

/// Answers questions about a dashboard through the configured provider.
///
/// The gateway holds no per-call state. Concurrent calls are independent and
/// each one issues at most one outbound request.
pub struct InsightGateway {
    options: GatewayOptions,
    factory: Arc<dyn ModelFactory>,
}

impl InsightGateway {
    #[must_use]
    pub fn new(options: GatewayOptions) -> Self {
        let factory = Arc::new(HttpModelFactory::new(&options));
        Self { options, factory }
    }

    /// Use a custom factory to build adapters, e.g. a test double.
    #[must_use]
    pub fn with_factory(options: GatewayOptions, factory: Arc<dyn ModelFactory>) -> Self {
        Self { options, factory }
    }

    /// Gateway configured from the process environment and `.env`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GatewayOptions::from_env())
    }

    /// Ask for an insight and render every outcome as user-facing text.
    ///
    /// Never fails: a missing key yields the localized configuration hint and
    /// a provider failure yields `"{Error} ({provider}): {message}"`.
    /// `provider` is the provider that was called, so an unrecognized tag
    /// routed to Gemini reports `gemini` rather than the tag itself.
    pub async fn get_insight(
        &self,
        widgets: &[WidgetSnapshot],
        query: Option<&str>,
        config: Option<&AIConfig>,
    ) -> String {
        let language = config.map(|config| config.language).unwrap_or_default();
        let terms = language.terms();

        match self.try_get_insight(widgets, query, config).await {
            Ok(text) => text,
            Err(InsightError::MissingCredential(_)) => terms.missing_api_key.to_string(),
            Err(InsightError::Provider { provider, source }) => {
                let message = source.to_string();
                let message = if message.is_empty() {
                    terms.connection_failed.to_string()
                } else {
                    message
                };
                format!("{} ({provider}): {message}", terms.error_prefix)
            }
        }
    }

    /// Like [`get_insight`](Self::get_insight) but keeps failures typed.
    ///
    /// An empty answer is not an error and resolves to [`NO_RESPONSE`].
    pub async fn try_get_insight(
        &self,
        widgets: &[WidgetSnapshot],
        query: Option<&str>,
        config: Option<&AIConfig>,
    ) -> Result<String, InsightError> {
        let default_config = AIConfig::default();
        let config = config.unwrap_or(&default_config);
        let terms = config.language.terms();

        let today = self
            .options
            .today
            .unwrap_or_else(|| chrono::Utc::now().date_naive());
        let context = build_context(widgets, config.language, today);

        let provider = ProviderKind::select(&config.provider);
        let Credential::Key(api_key) = resolve_credential(
            provider,
            config,
            self.options.fallback_api_key.as_deref(),
        ) else {
            debug!(%provider, "no API key available, skipping the provider call");
            return Err(InsightError::MissingCredential(provider));
        };

        let model_id = if config.model.is_empty() {
            provider.default_model()
        } else {
            config.model.as_str()
        };

        debug!(
            %provider,
            model = model_id,
            language = config.language.as_str(),
            widgets = widgets.len(),
            "routing insight request"
        );

        let model = self.factory.create(provider, model_id, &api_key);
        let input = LanguageModelInput {
            system_prompt: terms.system_prompt.to_string(),
            context,
            query: query.map(ToString::to_string),
            default_query: terms.default_query.to_string(),
            max_tokens: None,
        };

        let mut span = InsightSpan::new(provider, model_id, widgets.len());
        let timeout = self.options.timeout;
        let result = span
            .instrument_future(async {
                match tokio::time::timeout(timeout, model.generate(input)).await {
                    Ok(result) => result,
                    Err(_) => Err(LanguageModelError::Timeout(provider.as_str(), timeout)),
                }
            })
            .await;

        let response = match result {
            Ok(response) => response,
            Err(source) => {
                let error = InsightError::Provider { provider, source };
                error!(%provider, error = %error, kind = error.kind().as_str(), "insight request failed");
                span.on_error(&error);
                return Err(error);
            }
        };

        span.on_usage(response.usage.as_ref());

        let text = response
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty());

        if let Some(text) = text {
            span.on_outcome(InsightOutcome::Answered);
            Ok(text.to_string())
        } else {
            warn!(%provider, "provider returned no text");
            span.on_outcome(InsightOutcome::EmptyResponse);
            Ok(NO_RESPONSE.to_string())
        }
    }
}
