// folio-relay: Async Rust client for the EmailJS email relay REST API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::RelayClient;
pub use error::Error;
pub use models::{Credentials, TemplateParams};
pub use transport::TransportConfig;
