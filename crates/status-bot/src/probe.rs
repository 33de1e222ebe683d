//! Routstr API availability probe.

use async_trait::async_trait;
use flat_store::ServiceStatus;
use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::BotConfig;
use crate::error::BotError;

/// Result of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: ServiceStatus,
    /// Generated commentary, when the API answered with usable text.
    pub commentary: Option<String>,
}

impl ProbeOutcome {
    pub fn up(commentary: Option<String>) -> Self {
        Self {
            status: ServiceStatus::Up,
            commentary,
        }
    }

    pub fn down() -> Self {
        Self {
            status: ServiceStatus::Down,
            commentary: None,
        }
    }
}

/// Checks whether the API is serving requests.
#[async_trait]
pub trait ApiProbe: Send + Sync {
    /// Send `prompt` once. Never fails: any problem reads as `down`.
    async fn probe(&self, prompt: &str) -> ProbeOutcome;
}

/// Probe that issues a real chat completion.
pub struct HttpApiProbe {
    client: Client,
    chat_url: String,
    api_key: Option<String>,
    model: String,
}

impl HttpApiProbe {
    pub fn new(config: &BotConfig) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(config.probe_timeout)
            .build()
            .map_err(|e| BotError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            chat_url: config.chat_url(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl ApiProbe for HttpApiProbe {
    async fn probe(&self, prompt: &str) -> ProbeOutcome {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        debug!("Probing Routstr API at {}", self.chat_url);

        let mut builder = self
            .client
            .post(&self.chat_url)
            .header("Content-Type", "application/json")
            .header("Accept-Encoding", "identity")
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Routstr API unreachable");
                return ProbeOutcome::down();
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => interpret_response(status, &body),
            Err(err) => {
                warn!(status, error = %err, "Failed to read Routstr API response");
                ProbeOutcome::down()
            }
        }
    }
}

/// Classify an HTTP answer from the chat endpoint.
///
/// Only a 200 counts as up. A 200 whose body is not a chat completion still
/// counts as up, just without commentary.
pub fn interpret_response(status: u16, body: &str) -> ProbeOutcome {
    if status != 200 {
        let detail = serde_json::from_str::<ApiError>(body)
            .map(|api_error| api_error.error.message)
            .unwrap_or_else(|_| body.to_string());
        warn!(status, detail = %detail, "API returned non-OK status");
        return ProbeOutcome::down();
    }

    match serde_json::from_str::<ChatCompletionResponse>(body) {
        Ok(completion) => ProbeOutcome::up(completion.first_content().map(str::to_string)),
        Err(err) => {
            warn!(error = %err, "AI response received but couldn't parse content");
            ProbeOutcome::up(None)
        }
    }
}
