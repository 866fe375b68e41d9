use super::api::{CreateMessageParams, InputMessage, InputMessageRole, Message as AnthropicMessage};
use crate::{
    client_utils, LanguageModel, LanguageModelError, LanguageModelInput, LanguageModelResult,
    ModelResponse, ModelUsage,
};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "anthropic";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_API_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

pub struct AnthropicModel {
    model_id: String,
    api_key: String,
    base_url: String,
    api_version: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct AnthropicModelOptions {
    pub base_url: Option<String>,
    pub api_key: String,
    pub api_version: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl AnthropicModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, mut options: AnthropicModelOptions) -> Self {
        let base_url = options
            .base_url
            .take()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let api_version = options
            .api_version
            .take()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let client = options.client.take().unwrap_or_default();

        let headers = options.headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key: options.api_key,
            base_url,
            api_version,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> LanguageModelResult<HeaderMap> {
        let mut headers = client_utils::extra_headers(&self.headers, "Anthropic")?;

        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid Anthropic API key header value: {error}"
                ))
            })?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(&self.api_version).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid Anthropic version header value: {error}"
                ))
            })?,
        );

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl LanguageModel for AnthropicModel {
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
                let payload = convert_to_anthropic_create_params(input, &self.model_id);

                let headers = self.request_headers()?;

                let response: AnthropicMessage = client_utils::send_json(
                    &self.client,
                    &format!("{}/v1/messages", self.base_url),
                    &payload,
                    headers,
                    PROVIDER,
                )
                .await?;

                let usage = response.usage.as_ref().map(|usage| ModelUsage {
                    input_tokens: usage.input_tokens,
                    output_tokens: usage.output_tokens,
                });

                // Only the first content block is read.
                let text = response
                    .content
                    .into_iter()
                    .next()
                    .and_then(|block| block.text);

                Ok(ModelResponse { text, usage })
            },
        )
        .await
    }
}

fn convert_to_anthropic_create_params(
    input: LanguageModelInput,
    model_id: &str,
) -> CreateMessageParams {
    let content = format!("{}\n\n{}", input.context, input.user_text());

    CreateMessageParams {
        max_tokens: input.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        messages: vec![InputMessage {
            role: InputMessageRole::User,
            content,
        }],
        model: model_id.to_string(),
        system: Some(input.system_prompt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_joins_context_and_question_in_one_user_message() {
        let params = convert_to_anthropic_create_params(
            LanguageModelInput {
                system_prompt: "Be brief.".to_string(),
                context: "Tasks: 1/2".to_string(),
                query: Some("What next?".to_string()),
                default_query: "Analyze my dashboard.".to_string(),
                max_tokens: None,
            },
            "claude-3-haiku-20240307",
        );

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "max_tokens": 300,
                "messages": [
                    { "role": "user", "content": "Tasks: 1/2\n\nWhat next?" }
                ],
                "model": "claude-3-haiku-20240307",
                "system": "Be brief."
            })
        );
    }
}
