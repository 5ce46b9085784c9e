// Transport configuration for building the relay's reqwest::Client.
//
// EmailJS validates the `Origin` header against the account's allowed
// domains, so the origin is injected as a default header when configured.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ORIGIN};

use crate::error::Error;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    /// Value for the `Origin` header, if the relay account restricts origins.
    pub origin: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            origin: None,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT);

        if let Some(ref origin) = self.origin {
            let value = HeaderValue::from_str(origin)
                .map_err(|e| Error::Client(format!("invalid origin header: {e}")))?;
            let mut headers = HeaderMap::new();
            headers.insert(ORIGIN, value);
            builder = builder.default_headers(headers);
        }

        builder
            .build()
            .map_err(|e| Error::Client(format!("failed to build HTTP client: {e}")))
    }

    /// Set the `Origin` header sent with every request.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}
