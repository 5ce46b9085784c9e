// ── Core error types ──
//
// Errors surfaced by folio-core. The contact controller never lets a relay
// failure escape as an error value; it logs the detail and shows the fixed
// inline message instead. These variants exist for construction-time
// failures and for callers that talk to the relay directly.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration errors ─────────────────────────────────────────
    #[error("invalid relay configuration: {field} {reason}")]
    Config { field: &'static str, reason: String },

    // ── Relay errors (wrapped, not exposed raw) ──────────────────────
    #[error("Relay error: {message}")]
    Relay {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<folio_relay::Error> for CoreError {
    fn from(err: folio_relay::Error) -> Self {
        let status = err.status();
        match err {
            folio_relay::Error::InvalidUrl(e) => CoreError::Config {
                field: "endpoint",
                reason: e.to_string(),
            },
            folio_relay::Error::Rejected { message, .. } => CoreError::Relay { message, status },
            other => CoreError::Relay {
                message: other.to_string(),
                status,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn rejected_keeps_status_and_reason() {
        let err = CoreError::from(folio_relay::Error::Rejected {
            status: 400,
            message: "The template ID is invalid".into(),
        });
        match err {
            CoreError::Relay { message, status } => {
                assert_eq!(message, "The template ID is invalid");
                assert_eq!(status, Some(400));
            }
            other @ CoreError::Config { .. } => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn bad_url_maps_to_config() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = CoreError::from(folio_relay::Error::InvalidUrl(parse_err));
        assert!(matches!(err, CoreError::Config { field: "endpoint", .. }));
    }
}
