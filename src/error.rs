use thiserror::Error;

/// Minimum plausible Gemini API key length. Keys shorter than this are
/// almost certainly a misconfigured deployment, so we refuse to spend a
/// network round-trip on them.
pub const MIN_API_KEY_LEN: usize = 30;

/// Everything that can go wrong between a dispatched prompt and a delivered
/// reply. Each variant carries enough detail for operator logs; the session
/// only ever sees the generic line from [`RelayError::user_message`].
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("API key is missing or shorter than {MIN_API_KEY_LEN} characters")]
    Configuration,

    #[error("Request to Gemini failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini returned HTTP {status}")]
    Remote { status: u16, body: String },

    #[error("Gemini returned no candidates")]
    EmptyResponse,

    #[error("Unexpected response shape: {0}")]
    MalformedResponse(String),
}

impl RelayError {
    /// The single line shown to the session. Provider error bodies and
    /// transport detail stay out of here; they go to the logs instead.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::Configuration => {
                "Error: invalid API key in the server configuration.".to_string()
            }
            RelayError::Transport(_) => {
                "AI error: could not reach the AI service.".to_string()
            }
            RelayError::Remote { status, .. } => {
                format!("AI error: {status}. Check server logs for details.")
            }
            RelayError::EmptyResponse => "AI error: AI returned an empty response.".to_string(),
            RelayError::MalformedResponse(_) => {
                "AI error: unexpected response. Check server logs for details.".to_string()
            }
        }
    }

    /// Log the failure at operator level. Called once, at the outer boundary
    /// of the worker task, right before the error line is delivered.
    pub fn log(&self) {
        match self {
            // User-config problem, not a system fault.
            RelayError::Configuration => tracing::warn!(error = %self, "Refusing dispatch"),
            RelayError::Remote { status, body } => {
                tracing::error!(status, body = %body, "Gemini request rejected")
            }
            _ => tracing::error!(error = %self, "Gemini request failed"),
        }
    }
}
