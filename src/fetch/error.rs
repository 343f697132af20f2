//! Fetch error type
//!
//! Every failure collapses into one user-facing message. The variant keeps
//! the cause so it can be logged.

use std::fmt;

/// The message shown on the card for any failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch user data";

/// Errors that can occur while fetching a profile
#[derive(Debug)]
pub enum FetchError {
    /// Connection, DNS, TLS or body read failure
    Network(reqwest::Error),
    /// Server answered with a non-success status
    Status { status: u16 },
    /// Body is not the expected JSON shape
    Parse(serde_json::Error),
    /// Envelope parsed but `results` was empty
    EmptyResults,
}

impl FetchError {
    /// Generic message for display, regardless of cause
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Short cause label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::Parse(_) => "parse",
            Self::EmptyResults => "empty",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Status { status } => write!(f, "Unexpected HTTP status {}", status),
            Self::Parse(e) => write!(f, "Malformed response body: {}", e),
            Self::EmptyResults => write!(f, "Response contained no results"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}
