// Delivery seam between the controller and the email relay.

use std::future::Future;

use chrono::{DateTime, TimeZone};
use folio_relay::{RelayClient, TemplateParams};

use super::form::FormState;
use crate::error::CoreError;

/// Something that can deliver a composed message.
pub trait Relay: Send + Sync + 'static {
    fn deliver(&self, params: &TemplateParams)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

impl Relay for RelayClient {
    async fn deliver(&self, params: &TemplateParams) -> Result<(), CoreError> {
        self.send(params).await.map_err(CoreError::from)
    }
}

/// Build the template payload for a form, stamped with `now`.
///
/// Name and reply address go out trimmed, matching what validation checked.
/// The message body is sent as typed.
pub fn compose<Tz>(form: &FormState, now: &DateTime<Tz>) -> TemplateParams
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let name = form.name.trim();
    TemplateParams {
        name: name.to_owned(),
        email: form.email.trim().to_owned(),
        message: form.message.clone(),
        title: format!("Nuevo Mensaje de {name}"),
        time: now.format("%d/%m/%Y, %H:%M:%S").to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn compose_adds_title_and_time() {
        let form = FormState {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "Hola".into(),
        };
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();

        assert_eq!(
            compose(&form, &now),
            TemplateParams {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                message: "Hola".into(),
                title: "Nuevo Mensaje de Ana".into(),
                time: "01/05/2024, 10:30:00".into(),
            }
        );
    }

    #[test]
    fn compose_trims_reply_address_and_name() {
        let form = FormState {
            name: " Ana ".into(),
            email: "  ana@example.com ".into(),
            message: "  Hola\n".into(),
        };
        assert_eq!(form.validate(), Ok(()));
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();

        let params = compose(&form, &now);
        assert_eq!(params.email, "ana@example.com");
        assert_eq!(params.name, "Ana");
        assert_eq!(params.title, "Nuevo Mensaje de Ana");
        assert_eq!(params.message, "  Hola\n");
    }
}
