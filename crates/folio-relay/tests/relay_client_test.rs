#![allow(clippy::unwrap_used)]
// Integration tests for `RelayClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_relay::{Credentials, Error, RelayClient, TemplateParams, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

fn credentials() -> Credentials {
    Credentials {
        service_id: "service_portfolio".into(),
        template_id: "template_contact".into(),
        public_key: SecretString::from("pk_test".to_string()),
    }
}

fn params() -> TemplateParams {
    TemplateParams {
        name: "Ana".into(),
        email: "ana@example.com".into(),
        message: "Quiero una app".into(),
        title: "Nuevo Mensaje de Ana".into(),
        time: "01/05/2024, 10:30:00".into(),
    }
}

async fn setup() -> (MockServer, RelayClient) {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&server.uri()).unwrap();
    let client = RelayClient::with_client(reqwest::Client::new(), endpoint, credentials());
    (server, client)
}

// ── Delivery ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_send_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "service_id": "service_portfolio",
            "template_id": "template_contact",
            "user_id": "pk_test",
            "template_params": {
                "name": "Ana",
                "email": "ana@example.com",
                "message": "Quiero una app",
                "title": "Nuevo Mensaje de Ana",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    client.send(&params()).await.unwrap();
}

#[tokio::test]
async fn test_send_rejected_keeps_reason() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The Public Key is invalid"))
        .mount(&server)
        .await;

    let result = client.send(&params()).await;

    match result {
        Err(Error::Rejected { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "The Public Key is invalid");
        }
        other => panic!("expected Rejected error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_reports_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.send(&params()).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(
        matches!(err, Error::Rejected { status: 503, .. }),
        "expected Rejected 503, got: {err:?}"
    );
}

#[tokio::test]
async fn test_forbidden_reports_reason() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string("API calls are disabled for non-browser applications"),
        )
        .mount(&server)
        .await;

    let err = client.send(&params()).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    match err {
        Error::Rejected { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "API calls are disabled for non-browser applications");
        }
        other => panic!("expected Rejected error, got: {other:?}"),
    }
}

// ── Endpoint handling ───────────────────────────────────────────────

#[tokio::test]
async fn test_trailing_slash_endpoint() {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&format!("{}/", server.uri())).unwrap();
    let client = RelayClient::with_client(reqwest::Client::new(), endpoint, credentials());

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    client.send(&params()).await.unwrap();
}

#[tokio::test]
async fn test_transport_config_sends_origin() {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&server.uri()).unwrap();
    let transport = TransportConfig::default().with_origin("https://lautaro.dev");
    let client = RelayClient::new(endpoint, credentials(), &transport).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(header("origin", "https://lautaro.dev"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    client.send(&params()).await.unwrap();
}
