use std::env;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_PROMPT: &str = "Say 'Hello from Rust!' and tell me a short programming joke.";

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when ANTHROPIC_API_KEY is unset or empty. Callers must check
    /// this before attempting a request.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Config {
    pub fn from_env(model: String, max_tokens: u32) -> Self {
        let api_key = env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let api_url =
            env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Config {
            api_key,
            api_url,
            model,
            max_tokens,
        }
    }
}
