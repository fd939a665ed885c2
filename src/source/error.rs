//! Error types for medal fetches.

use thiserror::Error;

/// Why a medal fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The medal service could not be reached.
    #[error("Unable to reach the medal service: {0}")]
    Network(String),

    /// The medal service answered with a non-success status.
    #[error("The medal service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not an array of medal data.
    #[error("Invalid medal data format: {0}")]
    Format(String),
}

impl FetchError {
    /// Short category label.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Http { .. } => "server",
            FetchError::Format(_) => "format",
        }
    }

    /// What the user can do about it.
    pub fn hint(&self) -> &'static str {
        match self {
            FetchError::Network(_) => {
                "Please check your internet connection and try again."
            }
            FetchError::Http { .. } => {
                "The server is having trouble right now. Please try again later."
            }
            FetchError::Format(_) => {
                "The server sent data that could not be read. Please try again later."
            }
        }
    }

    /// Full message for the error panel.
    pub fn user_message(&self) -> String {
        format!("{}. {}", self, self.hint())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            FetchError::Format(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
