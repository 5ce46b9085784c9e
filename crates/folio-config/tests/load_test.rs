#![allow(clippy::unwrap_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;

use folio_config::{Config, RelayOverrides, load_config_from, resolve_relay, save_config};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(cfg.ui, Config::default().ui);
    assert_eq!(cfg.relay.timeout, 15);
}

#[test]
fn reads_relay_and_ui_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[relay]
service_id = "service_abc"
template_id = "template_xyz"
public_key = "pk_live"
endpoint = "http://localhost:8080"
timeout = 5

[ui]
reduced_motion = true
tick_rate_ms = 100
"#,
    )
    .unwrap();

    let cfg = load_config_from(&path).unwrap();
    assert!(cfg.ui.reduced_motion);
    assert!(cfg.ui.smooth_scroll);
    assert_eq!(cfg.ui.tick_rate(), Duration::from_millis(100));

    let relay = resolve_relay(&cfg, &RelayOverrides::default()).unwrap();
    assert_eq!(relay.service_id(), "service_abc");
    assert_eq!(relay.endpoint.as_str(), "http://localhost:8080/");
    assert_eq!(relay.timeout, Duration::from_secs(5));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[relay\nservice_id = ").unwrap();

    assert!(load_config_from(&path).is_err());
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.relay.service_id = Some("service_abc".into());
    cfg.ui.reduced_motion = true;
    save_config(&cfg, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.relay.service_id.as_deref(), Some("service_abc"));
    assert!(loaded.ui.reduced_motion);
}
