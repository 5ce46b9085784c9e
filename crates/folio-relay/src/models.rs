// Wire types for the EmailJS `email/send` endpoint.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Identifies the relay account, service, and template a message goes through.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key (sent as `user_id`).
    pub public_key: SecretString,
}

/// Variables substituted into the relay template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
    pub title: String,
    pub time: String,
}

/// Request body for `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

impl<'a> SendRequest<'a> {
    pub(crate) fn new(credentials: &'a Credentials, params: &'a TemplateParams) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: credentials.public_key.expose_secret(),
            template_params: params,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn send_request_uses_public_key_as_user_id() {
        let credentials = Credentials {
            service_id: "service_x".into(),
            template_id: "template_y".into(),
            public_key: SecretString::from("pk_123".to_string()),
        };
        let params = TemplateParams {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "Hola".into(),
            title: "Nuevo Mensaje de Ana".into(),
            time: "2024-05-01 10:00".into(),
        };

        let body = serde_json::to_value(SendRequest::new(&credentials, &params)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "pk_123",
                "template_params": {
                    "name": "Ana",
                    "email": "ana@example.com",
                    "message": "Hola",
                    "title": "Nuevo Mensaje de Ana",
                    "time": "2024-05-01 10:00",
                }
            })
        );
    }
}
