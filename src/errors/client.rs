use thiserror::Error;

/// Failure of a Client Data Layer call
///
/// Every variant carries a human-readable message for the views.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("{message} (status {status})")]
    Server { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Human-readable message, without the status decoration
    pub fn message(&self) -> &str {
        match self {
            ClientError::Transport(message) => message,
            ClientError::Server { message, .. } => message,
            ClientError::Decode(message) => message,
        }
    }

    /// HTTP status when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
