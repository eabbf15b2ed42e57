//! Config file loading tests

use std::io::Write;

use static_gate_core::{ConfigOverrides, GateConfig, GateError};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_explicit_file() {
    let file = write_config(
        r#"{ "video_src": "/clips/static.webm", "video_mime": "video/webm", "enter_delay_ms": 1500 }"#,
    );

    let config = GateConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.video_src, "/clips/static.webm");
    assert_eq!(config.video_mime, "video/webm");
    assert_eq!(config.enter_delay_ms, 1500);
    assert_eq!(config.exit_delay_ms, 3000);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let result = GateConfig::load(Some(missing.as_path()));
    assert!(matches!(result, Err(GateError::Io(_))));
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("{ enter_delay_ms: ");
    assert!(matches!(GateConfig::load(Some(file.path())), Err(GateError::Json(_))));
}

#[test]
fn test_wrong_type_is_error() {
    let file = write_config(r#"{ "exit_delay_ms": "three seconds" }"#);
    assert!(matches!(GateConfig::load(Some(file.path())), Err(GateError::Json(_))));
}

#[test]
fn test_empty_source_in_file_is_error() {
    let file = write_config(r#"{ "video_src": "" }"#);
    assert!(matches!(GateConfig::load(Some(file.path())), Err(GateError::Config(_))));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config(r#"{ "exit_delay_ms": 9000 }"#);
    let config = GateConfig::load(Some(file.path()))
        .unwrap()
        .with_overrides(ConfigOverrides {
            exit_delay_ms: Some(100),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(config.exit_delay_ms, 100);
}
