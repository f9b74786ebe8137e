use thiserror::Error;

/// Client-level error type.
/// Every variant maps to the alert text shown to the user via `user_message`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Submission failed (status {status})")]
    Submission { status: u16 },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Text for the blocking alert. Transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(msg) => msg.clone(),
            ClientError::Transport(e) => {
                tracing::error!("Transport error: {e}");
                if e.is_timeout() {
                    "The server took too long to respond. Please try again.".to_string()
                } else {
                    "Could not reach the interview server. Please try again.".to_string()
                }
            }
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Submission { status } => {
                tracing::error!("Submission rejected with status {status}");
                "An error occurred while submitting. Please try again.".to_string()
            }
            ClientError::Decode(msg) => {
                tracing::error!("Decode error: {msg}");
                "The server sent an unexpected response. Please try again.".to_string()
            }
            ClientError::Io(e) => format!("Could not read input: {e}"),
        }
    }
}
