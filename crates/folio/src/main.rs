//! `folio`: a developer portfolio rendered as a scrolling terminal page.
//!
//! Sections reveal themselves as they scroll into view, the navigation bar
//! follows in-page anchors, and the contact form sends messages through an
//! EmailJS relay when one is configured.
//!
//! Logs are written to a file (default `/tmp/folio.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod event;
mod layout;
mod relay;
mod sections;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use folio_config::{Config, RelayOverrides};
use folio_core::PageOptions;
use folio_core::motion::MotionDefaults;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::relay::AppRelay;

/// Terminal portfolio with animated sections and a working contact form.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// EmailJS service identifier
    #[arg(long, env = "FOLIO_SERVICE_ID")]
    service_id: Option<String>,

    /// EmailJS template identifier
    #[arg(long, env = "FOLIO_TEMPLATE_ID")]
    template_id: Option<String>,

    /// EmailJS public key
    #[arg(long, env = "FOLIO_PUBLIC_KEY", hide_env_values = true)]
    public_key: Option<String>,

    /// Skip animations: sections appear in their final state
    #[arg(long)]
    reduced_motion: bool,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    write_config: bool,

    /// Log file path (defaults to /tmp/folio.log)
    #[arg(long, default_value = "/tmp/folio.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(folio_config::config_path)
    }

    fn overrides(&self) -> RelayOverrides {
        RelayOverrides {
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr, which would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "folio={log_level},folio_core={log_level},folio_relay={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("folio.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Load the config file, falling back to defaults when it cannot be read.
fn load_config(cli: &Cli) -> Config {
    let path = cli.config_path();
    folio_config::load_config_from(&path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "config unreadable, using defaults");
        Config::default()
    })
}

/// A live relay when every credential resolves, else the inert stand-in.
fn build_relay(cli: &Cli, cfg: &Config) -> AppRelay {
    let client = folio_config::resolve_relay(cfg, &cli.overrides())
        .map_err(|e| e.to_string())
        .and_then(|relay| relay.build_client().map_err(|e| e.to_string()));

    match client {
        Ok(client) => {
            info!("email relay configured");
            AppRelay::Live(client)
        }
        Err(reason) => {
            warn!(%reason, "email relay unavailable, contact form will not send");
            AppRelay::unconfigured(reason)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file; hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let cfg = load_config(&cli);

    if cli.write_config {
        let path = cli.config_path();
        folio_config::save_config(&cfg, &path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let options = PageOptions {
        smooth_scroll: cfg.ui.smooth_scroll,
        motion: MotionDefaults {
            reduced: cli.reduced_motion || cfg.ui.reduced_motion,
            ..MotionDefaults::default()
        },
    };

    info!(
        reduced_motion = options.motion.reduced,
        smooth_scroll = options.smooth_scroll,
        "starting folio"
    );

    let relay = build_relay(&cli, &cfg);
    let mut app = App::new(relay, options, cfg.ui.tick_rate(), cfg.ui.render_rate());
    app.run().await?;

    Ok(())
}
