use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// True when the failure came from the network or the server rather than
    /// from user input.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ConsoleError::Transport(_) | ConsoleError::Api { .. } | ConsoleError::MalformedResponse(_)
        )
    }

    /// Text shown in the UI. Remote failures are marked as worth retrying;
    /// input and config problems are shown as is.
    pub fn user_message(&self) -> String {
        if self.is_remote() {
            format!("{}. Try again in a moment.", self)
        } else {
            self.to_string()
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ConsoleError::MalformedResponse(err.to_string())
        } else {
            ConsoleError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::MalformedResponse(err.to_string())
    }
}

impl From<ConsoleError> for String {
    fn from(err: ConsoleError) -> Self {
        err.user_message()
    }
}
