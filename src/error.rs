//! Typed errors for content fetching and preference persistence.
//!
//! Configuration and bootstrap code uses `anyhow`; everything a renderer
//! needs to branch on is a `thiserror` enum here.

use thiserror::Error;

/// Failure to produce a raw document.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content host has no usable document at `url`.
    ///
    /// `status` is `None` when the host answered 200 with an empty body.
    #[error("content not found at {url}{}", .status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default())]
    NotFound { url: String, status: Option<u16> },

    /// The slug cannot name a document; no request was made.
    #[error("invalid slug '{0}'")]
    InvalidSlug(String),

    /// The request never produced a response (DNS, connect, body read).
    #[error("failed to fetch content: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ContentError {
    /// Whether a renderer should show its 404 page for this error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidSlug(_))
    }

    /// Whether another attempt might succeed.
    ///
    /// Transport failures and 5xx responses are transient; a 4xx, an empty
    /// body or a bad slug will not change on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::NotFound {
                status: Some(status),
                ..
            } => *status >= 500,
            Self::NotFound { status: None, .. } | Self::InvalidSlug(_) => false,
        }
    }

    /// HTTP status of a not-found response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { status, .. } => *status,
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidSlug(_) => None,
        }
    }
}

/// Failure to read or write persisted preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference storage is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
