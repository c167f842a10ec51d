#![forbid(unsafe_code)]

//! Loading navigator policy from TOML and JSON files.
//!
//! Requires feature `policy-config`.
//!
//! Run:
//!   cargo test -p navrail-runtime --features policy-config --test nav_config_files

use std::io::Write;

use navrail_harness::{advance_ms, chat_navigator};
use navrail_runtime::{JumpViewportPolicy, NavConfig, NavConfigError};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file.flush().expect("flush config");
    file
}

#[test]
fn toml_file_overrides_selected_fields() {
    let file = write_temp(
        ".toml",
        r#"
[scheduler]
rebuild_debounce_ms = 120

[sync]
lead_in_px = 64.0
manual_scroll_window_ms = 500
jump_viewport = "settle"
jump_settle_ms = 250

[list]
tooltip_delay_ms = 800

[panel]
list_max_height_px = 300.0
"#,
    );

    let config = NavConfig::from_toml_file(file.path())
        .and_then(NavConfig::validated)
        .expect("valid config");

    assert_eq!(config.scheduler.rebuild_debounce_ms, 120);
    assert_eq!(config.sync.lead_in_px, 64.0);
    assert_eq!(config.sync.manual_scroll_window_ms, 500);
    assert_eq!(config.sync.jump_viewport, JumpViewportPolicy::Settle);
    assert_eq!(config.list.tooltip_delay_ms, 800);
    assert_eq!(config.panel.list_max_height_px, 300.0);
    // Untouched sections keep their defaults.
    assert_eq!(config.resolver, NavConfig::default().resolver);
    assert_eq!(config.list.title_max_chars, 80);
}

#[test]
fn json_file_round_trips_serialized_config() {
    let mut original = NavConfig::default();
    original.sync.viewport_fraction = 0.3;
    original.resolver.min_overflow_px = 60.0;
    let json = serde_json::to_string_pretty(&original).expect("serialize");

    let file = write_temp(".json", &json);
    let loaded = NavConfig::from_json_file(file.path()).expect("load json");
    assert_eq!(loaded, original);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = NavConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, NavConfigError::Io(_)));
    assert!(err.to_string().starts_with("I/O error"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn bad_toml_is_toml_error() {
    let file = write_temp(".toml", "[sync]\nlead_in_px = \"far\"\n");
    let err = NavConfig::from_toml_file(file.path()).unwrap_err();
    assert!(matches!(err, NavConfigError::Toml(_)));
    assert!(err.to_string().starts_with("TOML parse error"));
}

#[test]
fn out_of_range_values_fail_validation() {
    let file = write_temp(
        ".json",
        r#"{ "sync": { "viewport_fraction": 2.0 }, "list": { "title_max_chars": 0 } }"#,
    );
    let err = NavConfig::from_json_file(file.path())
        .and_then(NavConfig::validated)
        .unwrap_err();
    match err {
        NavConfigError::Validation(errors) => assert_eq!(errors.len(), 2, "{errors:?}"),
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn loaded_debounce_drives_the_navigator() {
    let config = NavConfig::from_toml_str("[scheduler]\nrebuild_debounce_ms = 50\n")
        .expect("valid toml");
    let mut nav = chat_navigator(&[0.0, 500.0], config);
    nav.on_mutation();
    assert_eq!(advance_ms(&mut nav, 49), 0);
    assert_eq!(advance_ms(&mut nav, 1), 1);
}
