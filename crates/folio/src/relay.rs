//! The relay the contact form talks to.

use folio_core::CoreError;
use folio_core::contact::Relay;
use folio_relay::{RelayClient, TemplateParams};

/// Shown under the form when messages cannot be sent.
pub const UNCONFIGURED_NOTICE: &str = "El envío de mensajes no está configurado.";

/// Either a live EmailJS client or a stand-in that fails every delivery.
///
/// An unconfigured relay keeps the form usable: submissions go through the
/// normal lifecycle and end in the inline error.
pub enum AppRelay {
    Live(RelayClient),
    Unconfigured { reason: String },
}

impl AppRelay {
    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self::Unconfigured {
            reason: reason.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

impl Relay for AppRelay {
    async fn deliver(&self, params: &TemplateParams) -> Result<(), CoreError> {
        match self {
            Self::Live(client) => client.deliver(params).await,
            Self::Unconfigured { reason } => Err(CoreError::Config {
                field: "relay",
                reason: reason.clone(),
            }),
        }
    }
}
