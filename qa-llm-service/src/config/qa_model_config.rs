/// Configuration for a chat-completion model invocation.
///
/// Resolved once at process startup (see
/// [`default_config`](crate::config::default_config)) and passed explicitly
/// to the services; nothing reads the environment after construction.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"meta-llama/llama-4-scout-17b-16e-instruct"`).
/// - `endpoint`: Base URL of the OpenAI-compatible API (e.g., `"https://api.groq.com/openai"`).
/// - `api_key`: Optional API key; required by [`GroqService`](crate::services::groq_service::GroqService).
/// - `max_tokens`: Maximum number of tokens to generate.
/// - `temperature`: Sampling temperature (0.0 = deterministic).
/// - `timeout_secs`: Request timeout in seconds.
#[derive(Debug, Clone)]
pub struct QaModelConfig {
    /// Model identifier string.
    pub model: String,

    /// Base URL of the OpenAI-compatible API. Request paths such as
    /// `/v1/chat/completions` are appended to it.
    pub endpoint: String,

    /// Optional API key for authentication.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
