use super::api::{Content, GenerateContentConfig, GenerateContentParameters, GenerateContentResponse};
use crate::{
    client_utils, LanguageModel, LanguageModelError, LanguageModelInput, LanguageModelResult,
    ModelResponse, ModelUsage,
};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "gemini";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini asks for an analysis with a fixed phrase rather than the localized
/// default question used by the chat style providers.
const ANALYZE_PROMPT: &str = "Analyze dashboard.";

pub struct GoogleModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleModelOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GoogleModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: GoogleModelOptions) -> Self {
        let GoogleModelOptions {
            api_key,
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_default();
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> LanguageModelResult<HeaderMap> {
        let mut headers = client_utils::extra_headers(&self.headers, "Google")?;

        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid Google API key header value: {error}"
                ))
            })?,
        );

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl LanguageModel for GoogleModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelResponse> {
        crate::opentelemetry::trace_generate(
            self.provider(),
            &self.model_id,
            input,
            |input| async move {
                let params = convert_to_generate_content_parameters(input);

                let url = format!("{}/models/{}:generateContent", self.base_url, self.model_id);

                let headers = self.request_headers()?;
                let response: GenerateContentResponse =
                    client_utils::send_json(&self.client, &url, &params, headers, PROVIDER)
                        .await?;

                let usage = response.usage_metadata.as_ref().map(|usage| ModelUsage {
                    input_tokens: usage.prompt_token_count.unwrap_or(0),
                    output_tokens: usage.candidates_token_count.unwrap_or(0),
                });

                Ok(ModelResponse {
                    text: response.text(),
                    usage,
                })
            },
        )
        .await
    }
}

fn convert_to_generate_content_parameters(input: LanguageModelInput) -> GenerateContentParameters {
    let prompt = build_prompt(&input);

    GenerateContentParameters {
        contents: vec![Content::text(Some("user"), prompt)],
        system_instruction: Some(Content::text(None, input.system_prompt)),
        generation_config: input.max_tokens.map(|max_tokens| GenerateContentConfig {
            max_output_tokens: Some(max_tokens),
        }),
    }
}

/// Gemini receives the context and the question as one combined prompt.
fn build_prompt(input: &LanguageModelInput) -> String {
    match input.query.as_deref().filter(|query| !query.is_empty()) {
        Some(query) => format!("Context: {}\nUser Question: {query}", input.context),
        None => format!("Context: {}\n\n{ANALYZE_PROMPT}", input.context),
    }
}
