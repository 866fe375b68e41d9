use crate::LanguageModelError;
use reqwest::{header::HeaderMap, Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Create a JSON request, parse the response.
/// Throws error on non OK status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
    provider: &'static str,
) -> Result<R, LanguageModelError> {
    let response = client
        .post(url)
        .headers(headers)
        .json(data)
        .send()
        .await
        .map_err(|error| LanguageModelError::Transport(provider, error))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LanguageModelError::StatusCode(
            provider,
            status,
            error_message_from_body(status, &body),
        ));
    }

    response
        .json::<R>()
        .await
        .map_err(|error| LanguageModelError::Transport(provider, error))
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// All three supported APIs report failures as `{"error": {"message": ...}}`.
/// Fall back to the raw body, then to the canonical status reason.
fn error_message_from_body(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|detail| detail.message)
        .filter(|message| !message.trim().is_empty());

    if let Some(message) = parsed {
        return message;
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}

/// Convert user supplied headers into a `HeaderMap`, tagging errors with the
/// provider name.
pub fn extra_headers<'a>(
    headers: impl IntoIterator<Item = (&'a String, &'a String)>,
    provider_name: &str,
) -> Result<HeaderMap, LanguageModelError> {
    use reqwest::header::{HeaderName, HeaderValue};

    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
            LanguageModelError::InvalidInput(format!(
                "Invalid {provider_name} header name '{key}': {error}"
            ))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|error| {
            LanguageModelError::InvalidInput(format!(
                "Invalid {provider_name} header value for '{key}': {error}"
            ))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_vendor_text() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(
            error_message_from_body(StatusCode::UNAUTHORIZED, body),
            "Incorrect API key provided"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_status() {
        assert_eq!(
            error_message_from_body(StatusCode::BAD_GATEWAY, "upstream exploded"),
            "upstream exploded"
        );
        assert_eq!(
            error_message_from_body(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }
}
