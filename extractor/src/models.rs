use serde::{Deserialize, Serialize};

/// Structured record extracted from the model's free-text reply. Each list
/// holds at most two entries; `error` is only present on a failure path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredAnswer {
    pub summary: String,
    pub symptoms: Vec<String>,
    pub remedies: Vec<String>,
    pub precautions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StructuredAnswer {
    fn failure(error: &str, summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    /// The model reply was empty or unusable before parsing even started.
    pub fn invalid_input() -> Self {
        Self::failure(
            "Invalid AI response received",
            "Unable to process the medical information.",
        )
    }

    /// Extraction itself failed on otherwise non-empty input.
    pub fn parse_failure() -> Self {
        Self::failure(
            "Failed to parse AI response",
            "There was an error processing the medical information.",
        )
    }

    /// The upstream response was missing choices or message content.
    pub fn upstream_invalid() -> Self {
        Self::failure(
            "Invalid AI response",
            "The AI service returned an invalid response.",
        )
    }

    /// Catch-all payload for unexpected request-path errors.
    pub fn server_error() -> Self {
        Self::failure(
            "Something went wrong!",
            "The server encountered an error while processing your request.",
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

// Response-side types are deliberately loose: a missing field means the
// upstream reply had an unexpected shape, which callers handle as a
// soft error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}
