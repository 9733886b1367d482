//! Deployment-time configuration.
//!
//! Endpoints and the completion credential are read from the environment of
//! the server process and never rendered into the page:
//! - `ZILL_TABULAR_STORE_URL` - Base URL of the tabular store (required)
//! - `ZILL_COMPLETION_API_URL` - Chat completion endpoint (default: OpenAI)
//! - `ZILL_COMPLETION_API_KEY` - Bearer credential for the completion API
//! - `ZILL_COMPLETION_MODEL` - Model name (default: `gpt-3.5-turbo`)
//! - `ZILL_COMPLETION_TEMPERATURE` - Sampling temperature (default: `0.7`)
//! - `ZILL_SYSTEM_PROMPT` - Assistant persona

use thiserror::Error;

pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_COMPLETION_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are Zill, a proactive and intelligent personal assistant who helps Mohamed reach his goals.";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct Config {
    pub tabular_store_base_url: String,
    pub completion_api_url: String,
    /// Held server-side only.
    pub completion_api_key: Option<String>,
    pub completion_model: String,
    pub completion_temperature: f32,
    pub system_prompt: String,
}

// Hand-written so the credential never reaches a log line.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("tabular_store_base_url", &self.tabular_store_base_url)
            .field("completion_api_url", &self.completion_api_url)
            .field(
                "completion_api_key",
                &self.completion_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("completion_model", &self.completion_model)
            .field("completion_temperature", &self.completion_temperature)
            .field("system_prompt", &self.system_prompt)
            .finish()
    }
}

impl Config {
    /// Create with defaults for everything but the store URL.
    pub fn new(tabular_store_base_url: impl Into<String>) -> Self {
        Self {
            tabular_store_base_url: tabular_store_base_url.into(),
            completion_api_url: DEFAULT_COMPLETION_API_URL.to_string(),
            completion_api_key: None,
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
            completion_temperature: DEFAULT_COMPLETION_TEMPERATURE,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        // Treat blank values as unset
        let get = |name| lookup(name).filter(|v: &String| !v.trim().is_empty());

        let base_url =
            get("ZILL_TABULAR_STORE_URL").ok_or(ConfigError::Missing("ZILL_TABULAR_STORE_URL"))?;
        let mut config = Self::new(base_url);

        if let Some(url) = get("ZILL_COMPLETION_API_URL") {
            config.completion_api_url = url;
        }
        config.completion_api_key = get("ZILL_COMPLETION_API_KEY");
        if let Some(model) = get("ZILL_COMPLETION_MODEL") {
            config.completion_model = model;
        }
        if let Some(raw) = get("ZILL_COMPLETION_TEMPERATURE") {
            config.completion_temperature =
                raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "ZILL_COMPLETION_TEMPERATURE",
                    value: raw.clone(),
                })?;
        }
        if let Some(prompt) = get("ZILL_SYSTEM_PROMPT") {
            config.system_prompt = prompt;
        }

        Ok(config)
    }

    pub fn with_completion_api(mut self, url: impl Into<String>, api_key: Option<String>) -> Self {
        self.completion_api_url = url.into();
        self.completion_api_key = api_key;
        self
    }
}
