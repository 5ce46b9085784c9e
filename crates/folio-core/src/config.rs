// ── Relay configuration ──
//
// Describes *which* relay account the contact form delivers through.
// Built once at start-up by the binary (flags, env, config file) and handed
// to the contact controller; core never reads the environment itself.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::CoreError;

/// Validated relay credentials and connection tuning.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    service_id: String,
    template_id: String,
    public_key: SecretString,
    /// API root (defaults to the public EmailJS host).
    pub endpoint: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// `Origin` header for accounts restricted to allowed origins.
    pub origin: Option<String>,
}

impl RelayConfig {
    /// Build a config, rejecting blank identifiers.
    ///
    /// All three identifiers are required; whitespace is trimmed.
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: SecretString,
    ) -> Result<Self, CoreError> {
        let service_id = required("service_id", service_id.into())?;
        let template_id = required("template_id", template_id.into())?;
        let key = required("public_key", public_key.expose_secret().to_owned())?;

        let endpoint = Url::parse(folio_relay::client::DEFAULT_ENDPOINT)?;

        Ok(Self {
            service_id,
            template_id,
            public_key: SecretString::from(key),
            endpoint,
            timeout: Duration::from_secs(15),
            origin: None,
        })
    }

    /// Override the API root.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send an `Origin` header with every request.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn public_key(&self) -> &SecretString {
        &self.public_key
    }

    /// Credentials in the relay client's shape.
    pub fn credentials(&self) -> folio_relay::Credentials {
        folio_relay::Credentials {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
        }
    }

    /// Build the HTTP relay client for this config.
    pub fn build_client(&self) -> Result<folio_relay::RelayClient, CoreError> {
        let transport = folio_relay::TransportConfig {
            timeout: self.timeout,
            origin: self.origin.clone(),
        };
        Ok(folio_relay::RelayClient::new(
            self.endpoint.clone(),
            self.credentials(),
            &transport,
        )?)
    }
}

impl From<url::ParseError> for CoreError {
    fn from(err: url::ParseError) -> Self {
        CoreError::Config {
            field: "endpoint",
            reason: err.to_string(),
        }
    }
}

fn required(field: &'static str, value: String) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Config {
            field,
            reason: "must not be empty".into(),
        });
    }
    Ok(trimmed.to_owned())
}
