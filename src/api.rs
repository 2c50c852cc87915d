use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{ChatMessage, MessageRequest, MessageResponse};

const ANTHROPIC_VERSION: &str = "2023-06-01";

// The service defines no timeout of its own; 60s bounds a dead connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Build the HTTP client shared by all requests in this process.
pub fn build_client() -> Result<reqwest::Client, ApiError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Send one prompt as a single user turn and return the text of the first
/// content block. `Ok(None)` means the service answered 2xx but the reply
/// contained no extractable text; that is not treated as a failure.
pub async fn send_message(
    client: &reqwest::Client,
    config: &Config,
    api_key: &str,
    prompt: &str,
) -> Result<Option<String>, ApiError> {
    let headers = build_anthropic_headers(api_key)?;
    let body = MessageRequest {
        model: config.model.clone(),
        max_tokens: config.max_tokens,
        messages: vec![ChatMessage::user(prompt)],
    };

    debug!(model = %config.model, url = %config.api_url, "posting message request");

    let response = client
        .post(&config.api_url)
        .headers(headers)
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let raw = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: raw,
        });
    }

    let envelope: MessageResponse = serde_json::from_str(&raw)?;
    Ok(envelope
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text))
}

fn build_anthropic_headers(api_key: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_str(api_key)?);
    headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    Ok(headers)
}
