//! Groq (OpenAI-compatible) service for chat completions.
//!
//! Minimal, non-streaming client around the Groq REST API. The request URL
//! is derived from `QaModelConfig::endpoint`:
//! - POST {endpoint}/v1/chat/completions — chat completion (non-streaming)
//!
//! Constructor validation:
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://
//! - `cfg.model` must be non-empty
//!
//! Errors are normalized via the unified types in `error_handler`.

use std::time::{Duration, Instant};

use reqwest::{StatusCode, header};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::qa_model_config::QaModelConfig,
    error_handler::{ConfigError, QaLlmError, make_snippet},
};

/// Thin client for Groq's OpenAI-compatible chat API.
///
/// Constructed from a complete [`QaModelConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (with timeout and default headers).
#[derive(Debug)]
pub struct GroqService {
    client: reqwest::Client,
    cfg: QaModelConfig,
    url_chat: String,
}

impl GroqService {
    /// Creates a new [`GroqService`] from the given config.
    ///
    /// Validates the API key, endpoint scheme, and model name, then builds
    /// an HTTP client with default headers and the configured timeout.
    ///
    /// # Errors
    /// - [`QaLlmError::Config`] with [`ConfigError::MissingApiKey`] if `cfg.api_key` is `None`
    /// - [`QaLlmError::Config`] with [`ConfigError::InvalidFormat`] if `cfg.endpoint` is invalid
    /// - [`QaLlmError::Config`] with [`ConfigError::EmptyModel`] if `cfg.model` is empty
    /// - [`QaLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: QaModelConfig) -> Result<Self, QaLlmError> {
        // 1) API key must be present.
        let api_key = cfg.api_key.clone().ok_or(ConfigError::MissingApiKey)?;

        // 2) Endpoint must use http/https.
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ConfigError::InvalidFormat {
                var: "GROQ_URL",
                reason: "must start with http:// or https://",
            }
            .into());
        }

        // 3) Model must be named.
        if cfg.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }

        // 4) HTTP client: timeout + default headers.
        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
                ConfigError::InvalidFormat {
                    var: "GROQ_API_KEY",
                    reason: "not a valid HTTP header value",
                }
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_chat = format!("{}/v1/chat/completions", base);

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = timeout.as_secs(),
            "GroqService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Performs a **non-streaming** chat completion request
    /// (`/v1/chat/completions`) with a single user message.
    ///
    /// Mapped options from config: `model`, `temperature`, `max_tokens`.
    /// Success requires status exactly 200.
    ///
    /// # Errors
    /// - [`QaLlmError::HttpStatus`] for any status other than 200
    /// - [`QaLlmError::HttpTransport`] for client/network failures
    /// - [`QaLlmError::Decode`] if the 200 body cannot be parsed
    /// - [`QaLlmError::EmptyChoices`] if no choices are returned
    pub async fn chat(&self, prompt: &str) -> Result<String, QaLlmError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt);

        debug!(
            model = %self.cfg.model,
            endpoint = %self.cfg.endpoint,
            prompt_len = prompt.len(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if resp.status() != StatusCode::OK {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %self.cfg.model,
                endpoint = %self.cfg.endpoint,
                latency_ms = started.elapsed().as_millis(),
                "/v1/chat/completions returned an unexpected status"
            );

            return Err(QaLlmError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: ChatCompletionResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    endpoint = %self.cfg.endpoint,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode /v1/chat/completions response"
                );
                return Err(QaLlmError::Decode(format!(
                    "serde error: {e}; expected `choices[0].message.content`"
                )));
            }
        };

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or(QaLlmError::EmptyChoices)?;

        info!(
            model = %self.cfg.model,
            endpoint = %self.cfg.endpoint,
            latency_ms = started.elapsed().as_millis(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Minimal request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Builds a minimal single-user-message chat request from config.
    fn from_cfg(cfg: &'a QaModelConfig, prompt: &'a str) -> Self {
        Self {
            model: &cfg.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
        }
    }
}

/// Chat message for the OpenAI-compatible API.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    /// One of: "system" | "user" | "assistant".
    role: &'a str,
    content: &'a str,
}

/// Minimal response for `/v1/chat/completions`.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> QaModelConfig {
        QaModelConfig {
            model: "meta-llama/llama-4-scout-17b-16e-instruct".into(),
            endpoint: "https://api.groq.com/openai".into(),
            api_key: Some("gsk-test".into()),
            max_tokens: Some(512),
            temperature: Some(0.5),
            timeout_secs: Some(30),
        }
    }

    #[test]
    fn request_body_matches_wire_contract() {
        let config = cfg();
        let body = ChatCompletionRequest::from_cfg(&config, "Who is this?");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json["model"],
            "meta-llama/llama-4-scout-17b-16e-instruct"
        );
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Who is this?");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 512);
    }

    #[test]
    fn optional_options_are_omitted_when_unset() {
        let mut config = cfg();
        config.temperature = None;
        config.max_tokens = None;
        let body = ChatCompletionRequest::from_cfg(&config, "hi");
        let json = serde_json::to_value(&body).unwrap();

        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn constructor_rejects_missing_key_and_bad_endpoint() {
        let mut config = cfg();
        config.api_key = None;
        assert!(GroqService::new(config).is_err());

        let mut config = cfg();
        config.endpoint = "api.groq.com".into();
        assert!(GroqService::new(config).is_err());

        let mut config = cfg();
        config.model = "  ".into();
        assert!(GroqService::new(config).is_err());
    }
}
