//! Health probe for the Groq (OpenAI-compatible) backend.
//!
//! Performs `GET {endpoint}/v1/models` with Bearer auth as a best-effort
//! reachability check. The returned [`HealthStatus`] is JSON-serializable
//! and suitable for a `/health` endpoint. [`HealthService::check`] is
//! resilient and never fails (errors mapped to `ok=false`); the inner
//! probe returns a strict `Result`.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::qa_model_config::QaModelConfig,
    error_handler::{QaLlmError, make_snippet},
};

/// Provider label reported in health snapshots.
const PROVIDER: &str = "Groq";

/// A serializable health snapshot for the configured backend.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Backend/provider label.
    pub provider: String,
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Model identifier the service is configured with.
    pub model: String,
    /// Overall health flag.
    pub ok: bool,
    /// Measured HTTP latency in milliseconds for the probe.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

impl HealthStatus {
    #[inline]
    fn ok(cfg: &QaModelConfig, latency_ms: u128, message: impl Into<String>) -> Self {
        Self {
            provider: PROVIDER.to_string(),
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            ok: true,
            latency_ms,
            message: message.into(),
        }
    }

    #[inline]
    fn fail(cfg: &QaModelConfig, latency_ms: u128, message: impl Into<String>) -> Self {
        Self {
            provider: PROVIDER.to_string(),
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            ok: false,
            latency_ms,
            message: message.into(),
        }
    }
}

/// Health checker that reuses a single HTTP client across probes.
pub struct HealthService {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl HealthService {
    /// Creates a new health service with an optional client timeout (seconds).
    ///
    /// # Errors
    /// Returns [`QaLlmError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, QaLlmError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Checks reachability of the configured backend.
    ///
    /// This method is **resilient**: it never returns an error. Any failure
    /// is converted to `HealthStatus { ok: false, message: ... }`, which is
    /// convenient for `/health`.
    pub async fn check(&self, cfg: &QaModelConfig) -> HealthStatus {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            warn!(
                endpoint = %cfg.endpoint,
                "invalid endpoint (empty or missing http/https)"
            );
            return HealthStatus::fail(cfg, 0, "invalid endpoint (empty or missing http/https)");
        }

        let url = format!("{}/v1/models", endpoint.trim_end_matches('/'));
        let started = Instant::now();

        match self.try_probe(cfg, &url).await {
            Ok(()) => {
                let latency_ms = started.elapsed().as_millis();
                info!(%url, latency_ms, "backend reachable");
                HealthStatus::ok(cfg, latency_ms, "reachable")
            }
            Err(err) => {
                let latency_ms = started.elapsed().as_millis();
                warn!(%url, latency_ms, error = %err, "backend probe failed");
                HealthStatus::fail(cfg, latency_ms, err.to_string())
            }
        }
    }

    /// Strict probe: `GET {url}` with Bearer auth when a key is configured.
    ///
    /// # Errors
    /// - [`QaLlmError::HttpTransport`] on connection/timeout failures
    /// - [`QaLlmError::HttpStatus`] for non-2xx responses
    async fn try_probe(&self, cfg: &QaModelConfig, url: &str) -> Result<(), QaLlmError> {
        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(self.default_timeout);

        let mut req = self.client.get(url).timeout(timeout);
        if let Some(key) = &cfg.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(QaLlmError::HttpStatus {
                status,
                url: url.to_string(),
                snippet: make_snippet(&text),
            });
        }

        Ok(())
    }
}
