//! Celebrity QA LLM service.
//!
//! A thin client around Groq's OpenAI-compatible chat-completions API plus
//! the plumbing a backend needs around it: environment-driven configuration,
//! a unified error type, a resilient health probe, and library-scoped
//! tracing helpers.
//!
//! The high-level entry point is [`CelebrityQa`]: build it once at startup
//! (typically from [`config::default_config::config_groq`]), share it behind
//! an `Arc`, and call [`CelebrityQa::ask_about_celebrity`]. That call never
//! fails outward: any upstream problem is logged and converted into the
//! fixed fallback sentence [`celebrity_qa::FALLBACK_ANSWER`].

pub mod celebrity_qa;
pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod services;
pub mod telemetry;

pub use celebrity_qa::{CelebrityQa, FALLBACK_ANSWER};
pub use config::qa_model_config::QaModelConfig;
pub use error_handler::{QaLlmError, Result};
pub use health_service::{HealthService, HealthStatus};
