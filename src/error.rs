use reqwest::header::InvalidHeaderValue;

/// Failure modes of a single messages-API call. The missing-credential case
/// is not represented here: it is checked before any request is attempted.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success HTTP status; carries the raw body for diagnostics.
    #[error("API error: HTTP {status}\n{body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not parse response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API key is not a valid header value: {0}")]
    Header(#[from] InvalidHeaderValue),
}
