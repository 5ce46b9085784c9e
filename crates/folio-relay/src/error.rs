use thiserror::Error;

/// Top-level error type for the `folio-relay` crate.
///
/// `folio-core` folds every variant into a single user-facing message;
/// the detail only reaches the log file.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    // ── Relay ───────────────────────────────────────────────────────
    /// The relay answered with a non-success status. EmailJS puts a
    /// plain-text reason in the body (e.g. "The Public Key is invalid").
    #[error("Relay rejected the message (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

impl Error {
    /// HTTP status returned by the relay, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
