// EmailJS HTTP client
//
// Wraps `reqwest::Client` with endpoint construction and status mapping.
// The relay answers `200 OK` with a plain-text body on success and a
// plain-text reason on failure, so there is no envelope to unwrap.

use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::models::{Credentials, SendRequest, TemplateParams};
use crate::transport::TransportConfig;

/// Public EmailJS API host.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";

const SEND_PATH: &str = "api/v1.0/email/send";

/// Raw HTTP client for the EmailJS REST API.
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: Url,
    credentials: Credentials,
}

impl RelayClient {
    /// Create a new relay client from a `TransportConfig`.
    ///
    /// `endpoint` is the API root (e.g. `https://api.emailjs.com`).
    pub fn new(
        endpoint: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            endpoint,
            credentials,
        })
    }

    /// Create a relay client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoint: Url, credentials: Credentials) -> Self {
        Self {
            http,
            endpoint,
            credentials,
        }
    }

    /// The API root this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The service the messages are routed through.
    pub fn service_id(&self) -> &str {
        &self.credentials.service_id
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Full URL of the send endpoint: `{endpoint}/api/v1.0/email/send`.
    pub(crate) fn send_url(&self) -> Result<Url, Error> {
        let base = self.endpoint.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{SEND_PATH}"))?)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Deliver one message through the configured template.
    ///
    /// Any 2xx status counts as delivered. Other statuses become
    /// [`Error::Rejected`] carrying the relay's plain-text reason.
    pub async fn send(&self, params: &TemplateParams) -> Result<(), Error> {
        let url = self.send_url()?;
        debug!(
            service = %self.credentials.service_id,
            template = %self.credentials.template_id,
            "POST {}",
            url
        );

        let body = SendRequest::new(&self.credentials, params);
        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "relay accepted message");
            return Ok(());
        }

        let message = resp.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %message, "relay rejected message");
        Err(Error::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
