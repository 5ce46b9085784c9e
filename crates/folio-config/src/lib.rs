//! Configuration for the folio binary.
//!
//! A TOML file at the platform config dir, `FOLIO_`-prefixed environment
//! overrides, and translation to `folio_core::RelayConfig`. Command-line
//! flags sit on top through [`RelayOverrides`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use folio_core::{CoreError, RelayConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl From<CoreError> for ConfigError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config { field, reason } => Self::Validation {
                field: field.into(),
                reason,
            },
            CoreError::Relay { message, .. } => Self::Validation {
                field: "relay".into(),
                reason: message,
            },
        }
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Email relay account.
    #[serde(default)]
    pub relay: RelaySection,

    /// Terminal presentation.
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RelaySection {
    pub service_id: Option<String>,

    pub template_id: Option<String>,

    /// Public key (plaintext; prefer `FOLIO_RELAY__PUBLIC_KEY`).
    pub public_key: Option<String>,

    /// API root override (e.g. a proxy).
    pub endpoint: Option<String>,

    /// `Origin` header sent with each request.
    pub origin: Option<String>,

    /// Request timeout in seconds. Zero is raised to one.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            endpoint: None,
            origin: None,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    15
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSection {
    /// Skip tweening and delays; loops stay still.
    #[serde(default)]
    pub reduced_motion: bool,

    /// Glide to anchors instead of jumping.
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,

    /// Logic tick interval in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Redraw interval in milliseconds.
    #[serde(default = "default_render_rate")]
    pub render_rate_ms: u64,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            smooth_scroll: true,
            tick_rate_ms: default_tick_rate(),
            render_rate_ms: default_render_rate(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate() -> u64 {
    250
}
fn default_render_rate() -> u64 {
    33
}

impl UiSection {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn render_rate(&self) -> Duration {
        Duration::from_millis(self.render_rate_ms.max(1))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "folio", "folio").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("folio");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the default path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` + environment. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FOLIO_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parent dirs.
pub fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Relay resolution ────────────────────────────────────────────────

/// Values from command-line flags, which win over the file and env.
#[derive(Debug, Default, Clone)]
pub struct RelayOverrides {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

/// Build a validated `RelayConfig`. Each identifier must be present and
/// non-blank after overrides are applied.
pub fn resolve_relay(cfg: &Config, overrides: &RelayOverrides) -> Result<RelayConfig, ConfigError> {
    let relay = &cfg.relay;
    let pick = |flag: Option<&String>, file: Option<&String>| {
        flag.or(file).cloned().unwrap_or_default()
    };

    let service_id = pick(overrides.service_id.as_ref(), relay.service_id.as_ref());
    let template_id = pick(overrides.template_id.as_ref(), relay.template_id.as_ref());
    let public_key = SecretString::from(pick(
        overrides.public_key.as_ref(),
        relay.public_key.as_ref(),
    ));

    let mut resolved = RelayConfig::new(service_id, template_id, public_key)?
        .with_timeout(Duration::from_secs(relay.timeout.max(1)));

    if let Some(ref endpoint) = relay.endpoint {
        let url: url::Url = endpoint.parse().map_err(|_| ConfigError::Validation {
            field: "endpoint".into(),
            reason: format!("invalid URL: {endpoint}"),
        })?;
        resolved = resolved.with_endpoint(url);
    }
    if let Some(ref origin) = relay.origin {
        resolved = resolved.with_origin(origin.clone());
    }

    Ok(resolved)
}
