use review_common::ValidationError;
use thiserror::Error;

/// Every way a fetch layer call can fail.
///
/// Nothing here is retried. Callers show [`ClientError::user_message`] inline
/// and let the user try again.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request could not be sent: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no session token")]
    Unauthenticated,

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Single line of text suitable for showing next to a form or list.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the server. Please try again.".into(),
            Self::Status { message, .. } => message.clone(),
            Self::Validation(err) => err.to_string(),
            Self::Unauthenticated => "Please sign in to continue.".into(),
            Self::Decode(_) => "The server sent an unexpected response.".into(),
            Self::InvalidBaseUrl(_) => "The review service is misconfigured.".into(),
        }
    }

    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
