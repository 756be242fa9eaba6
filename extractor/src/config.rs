use anyhow::Result;
use std::env;

const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";
const DEFAULT_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct-Turbo-Free";
const DEFAULT_PORT: u16 = 8000;

/// Everything the completion client needs to talk upstream.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// Process configuration, read from the environment once at startup and
/// handed to the HTTP layer explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub llm: LlmConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TOGETHER_API_KEY")
            .map_err(|_| anyhow::anyhow!("TOGETHER_API_KEY environment variable not set"))?;

        let base_url =
            env::var("TOGETHER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("TOGETHER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            port,
            llm: LlmConfig {
                base_url,
                api_key,
                model,
            },
        })
    }
}
