use serde::{Deserialize, Serialize};

/// Request payload for /ask.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Celebrity name, as identified by the upstream detection step.
    pub name: String,
    /// Natural language question about the celebrity.
    pub question: String,
}

/// Response payload for /ask.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Model answer, or the fixed fallback sentence when the upstream call
    /// did not produce a usable answer.
    pub answer: String,
}
