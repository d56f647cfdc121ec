use std::sync::Arc;

use qa_llm_service::{CelebrityQa, HealthService, QaModelConfig, config::default_config};
use thiserror::Error;

use crate::error_handler::AppError;

/// Default upload cap, in megabytes.
const DEFAULT_UPLOAD_LIMIT_MB: usize = 16;

/// Errors raised while loading [`AppState`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse (like ports or limits).
    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `MAX_UPLOAD_MB`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected usize`).
        reason: &'static str,
    },
}

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Address the HTTP listener binds to, e.g. "127.0.0.1:8080".
    pub bind_address: String,
    /// Maximum accepted request body size, in megabytes.
    pub upload_limit_mb: usize,
    /// Shared QA client (Groq chat completions).
    pub qa: Arc<CelebrityQa>,
    /// Config the QA client was built from; reused by the health probe.
    pub qa_config: QaModelConfig,
    /// Shared health checker for the chat backend.
    pub health: Arc<HealthService>,
}

impl AppState {
    /// Load shared state from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address =
            std::env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".into());

        let upload_limit_mb = match std::env::var("MAX_UPLOAD_MB") {
            Ok(v) if !v.trim().is_empty() => {
                v.parse::<usize>().map_err(|_| ConfigError::InvalidNumber {
                    var: "MAX_UPLOAD_MB",
                    reason: "expected usize",
                })?
            }
            _ => DEFAULT_UPLOAD_LIMIT_MB,
        };

        let qa_config = default_config::config_groq()?;
        let qa = Arc::new(CelebrityQa::new(qa_config.clone())?);
        let health = Arc::new(HealthService::new(Some(5))?);

        Ok(Self {
            bind_address,
            upload_limit_mb,
            qa,
            qa_config,
            health,
        })
    }
}
