//! Integration gateway for the two external services.
//!
//! - [`SheetClient`] talks to the spreadsheet-backed tabular store.
//! - [`CompletionClient`] talks to the hosted chat-completion API.
//!
//! Neither client retries, pages, or streams. Responses are decoded into the
//! shapes in [`crate::models`].

mod completion;
mod sheet;

pub use completion::*;
pub use sheet::*;

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::Config;

/// Gateway errors: network failure, non-success status, or a body that
/// does not decode.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("completion response contained no choices")]
    NoCompletion,

    #[error("completion API key is not configured")]
    MissingCredential,
}

impl GatewayError {
    fn decode(e: impl std::fmt::Display) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Read the body of an upstream response, converting failures to
/// [`GatewayError`]. The body is decoded separately so that a malformed body
/// is reported as such rather than as a transport error.
async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, GatewayError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(GatewayError::Status { status, body });
    }
    serde_json::from_str(&body).map_err(GatewayError::decode)
}

/// Both clients, sharing one connection pool.
#[derive(Debug, Clone)]
pub struct Gateway {
    pub sheets: SheetClient,
    pub completion: CompletionClient,
    system_prompt: String,
}

impl Gateway {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::new();
        Self {
            sheets: SheetClient::with_client(http.clone(), &config.tabular_store_base_url),
            completion: CompletionClient::with_client(
                http,
                &config.completion_api_url,
                config.completion_api_key.clone(),
                &config.completion_model,
                config.completion_temperature,
            ),
            system_prompt: config.system_prompt.clone(),
        }
    }

    /// Ask the assistant persona a single question.
    pub async fn ask(&self, prompt: &str) -> Result<String, GatewayError> {
        self.completion
            .complete_chat(&self.system_prompt, prompt)
            .await
    }
}
