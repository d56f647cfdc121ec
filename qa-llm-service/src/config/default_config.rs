//! Default QA model config loaded strictly from environment variables.
//!
//! This module is the only place in the crate that touches the process
//! environment. The resulting [`QaModelConfig`] is handed to the services
//! at construction, which keeps them deterministic under test.
//!
//! # Environment variables
//!
//! - `GROQ_API_KEY`     = API key (mandatory)
//! - `GROQ_URL`         = API base URL (optional)
//! - `GROQ_MODEL`       = model identifier (optional)
//! - `LLM_MAX_TOKENS`   = max tokens to generate, u32 (optional)
//! - `LLM_TEMPERATURE`  = sampling temperature, f32 in 0.0..=2.0 (optional)
//! - `LLM_TIMEOUT_SECS` = request timeout in seconds, u64 (optional)

use crate::{
    config::qa_model_config::QaModelConfig,
    error_handler::{
        QaLlmError, env_opt_f32, env_opt_u32, env_opt_u64, must_env, validate_http_endpoint,
        validate_range_f32,
    },
};

/// Base URL of Groq's OpenAI-compatible API.
pub const DEFAULT_GROQ_ENDPOINT: &str = "https://api.groq.com/openai";

/// Default chat model.
pub const DEFAULT_GROQ_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// Default generation budget.
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolves the Groq endpoint from `GROQ_URL`, falling back to the public API.
fn groq_endpoint() -> Result<String, QaLlmError> {
    let endpoint = std::env::var("GROQ_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GROQ_ENDPOINT.to_string());
    validate_http_endpoint("GROQ_URL", &endpoint)?;
    Ok(endpoint)
}

/// Constructs the QA chat config from the environment.
///
/// # Env
/// - `GROQ_API_KEY` (required)
/// - `GROQ_URL`, `GROQ_MODEL`, `LLM_MAX_TOKENS`, `LLM_TEMPERATURE`,
///   `LLM_TIMEOUT_SECS` (optional)
///
/// # Defaults
/// - `max_tokens = Some(512)`
/// - `temperature = Some(0.5)`
/// - `timeout_secs = Some(30)`
///
/// # Errors
/// Returns [`QaLlmError::Config`] when `GROQ_API_KEY` is missing or empty,
/// when a numeric variable fails to parse, or when the temperature is
/// outside `0.0..=2.0`.
pub fn config_groq() -> Result<QaModelConfig, QaLlmError> {
    let api_key = must_env("GROQ_API_KEY")?;
    let endpoint = groq_endpoint()?;
    let model = std::env::var("GROQ_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string());

    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?.or(Some(DEFAULT_MAX_TOKENS));
    let temperature = env_opt_f32("LLM_TEMPERATURE")?.unwrap_or(DEFAULT_TEMPERATURE);
    validate_range_f32("temperature", temperature, 0.0, 2.0)?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.or(Some(DEFAULT_TIMEOUT_SECS));

    Ok(QaModelConfig {
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(temperature),
        timeout_secs,
    })
}
