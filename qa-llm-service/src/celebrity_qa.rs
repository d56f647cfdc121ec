//! Celebrity question answering on top of the Groq chat service.
//!
//! [`CelebrityQa`] is the component the web layer talks to. It builds the
//! fixed instruction prompt, performs exactly one upstream call per
//! question, and converts every failure into the fixed fallback sentence,
//! so callers always receive a displayable string.

use tracing::error;

use crate::{
    config::{default_config::config_groq, qa_model_config::QaModelConfig},
    error_handler::QaLlmError,
    services::groq_service::GroqService,
};

/// Sentence returned whenever the upstream call does not yield a usable
/// answer.
pub const FALLBACK_ANSWER: &str = "Sorry I couldn't find the answer";

/// Builds the instruction prompt for a `(name, question)` pair.
///
/// Pure function of its inputs; both are interpolated verbatim.
pub fn build_prompt(name: &str, question: &str) -> String {
    format!(
        "You are a helpful AI assistant specialized in celebrity knowledge. \
         Provide concise, accurate, and respectful answers about {name}.\nQuestion: {question}"
    )
}

/// Question answering about a named celebrity.
///
/// Holds no mutable state: each call is a stateless, single-shot
/// request/response cycle against the configured chat endpoint.
pub struct CelebrityQa {
    service: GroqService,
}

impl CelebrityQa {
    /// Creates the QA component from an explicit config.
    ///
    /// # Errors
    /// Propagates [`GroqService::new`] validation failures.
    pub fn new(cfg: QaModelConfig) -> Result<Self, QaLlmError> {
        Ok(Self {
            service: GroqService::new(cfg)?,
        })
    }

    /// Creates the QA component from environment variables.
    ///
    /// # Errors
    /// Returns [`QaLlmError::Config`] when the environment is incomplete;
    /// see [`config_groq`].
    pub fn from_env() -> Result<Self, QaLlmError> {
        Self::new(config_groq()?)
    }

    /// Answers `question` about the celebrity `name`.
    ///
    /// On success returns the model's answer text. On any failure (a
    /// non-200 status, a transport error or timeout, an undecodable body,
    /// an empty `choices` array) the real reason is logged and
    /// [`FALLBACK_ANSWER`] is returned instead. The call never fails
    /// outward.
    pub async fn ask_about_celebrity(&self, name: &str, question: &str) -> String {
        let prompt = build_prompt(name, question);
        match self.service.chat(&prompt).await {
            Ok(answer) => answer,
            Err(err) => {
                error!(%name, error = %err, "celebrity QA request failed");
                FALLBACK_ANSWER.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_both_inputs_verbatim() {
        let prompt = build_prompt("Tom Hanks", "What is his most famous role?");
        assert!(prompt.contains("Tom Hanks"));
        assert!(prompt.contains("What is his most famous role?"));
    }

    #[test]
    fn prompt_frames_the_assistant_role() {
        let prompt = build_prompt("Zendaya", "When was she born?");
        assert!(prompt.starts_with("You are a helpful AI assistant"));
        assert!(prompt.contains("respectful answers about Zendaya"));
    }
}
