use super::validation::canonical_file;
use super::AppConfig;
use crate::input::InputTuning;
use clap::Parser;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = env::temp_dir().join(format!("hemikey-{nanos}-{name}"));
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn defaults_validate_and_match_input_tuning() {
    let mut cfg = AppConfig::parse_from(["test-app"]);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.input_tuning(), InputTuning::default());
}

#[test]
fn rejects_deadzone_out_of_bounds() {
    let mut cfg = AppConfig::parse_from(["test-app", "--deadzone=-0.1"]);
    assert!(cfg.validate().is_err());
    let mut cfg = AppConfig::parse_from(["test-app", "--deadzone", "0.95"]);
    assert!(cfg.validate().is_err());
    let mut cfg = AppConfig::parse_from(["test-app", "--deadzone", "NaN"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn accepts_deadzone_bounds() {
    let mut cfg = AppConfig::parse_from(["test-app", "--deadzone", "0"]);
    assert!(cfg.validate().is_ok());
    let mut cfg = AppConfig::parse_from(["test-app", "--deadzone", "0.9"]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn rejects_gains_out_of_bounds() {
    let mut cfg = AppConfig::parse_from(["test-app", "--left-horizontal-gain", "46"]);
    assert!(cfg.validate().is_err());
    let mut cfg = AppConfig::parse_from(["test-app", "--right-vertical-gain=-1"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_throttle_faster_than_poll() {
    let mut cfg = AppConfig::parse_from(["test-app", "--poll-ms", "50", "--throttle-ms", "40"]);
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("--throttle-ms"));
}

#[test]
fn rejects_zero_poll_and_debounce() {
    let mut cfg = AppConfig::parse_from(["test-app", "--poll-ms", "0"]);
    assert!(cfg.validate().is_err());
    let mut cfg = AppConfig::parse_from(["test-app", "--debounce-ms", "0"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn custom_timings_flow_into_tuning() {
    let mut cfg = AppConfig::parse_from([
        "test-app",
        "--poll-ms",
        "10",
        "--throttle-ms",
        "50",
        "--debounce-ms",
        "300",
        "--deadzone",
        "0.2",
    ]);
    cfg.validate().expect("valid config");
    let tuning = cfg.input_tuning();
    assert_eq!(tuning.poll_interval.as_millis(), 10);
    assert_eq!(tuning.throttle_interval.as_millis(), 50);
    assert_eq!(tuning.debounce_cooldown.as_millis(), 300);
    assert_eq!(tuning.deadzone, 0.2);
}

#[test]
fn missing_catalog_file_is_rejected() {
    let mut cfg = AppConfig::parse_from(["test-app", "--catalog", "/nonexistent/rows.yaml"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn catalog_file_is_canonicalized_and_loaded() {
    let path = temp_file("rows.yaml", "rows:\n  - \"AB\"\n  - \"CD\"\n");
    let mut cfg = AppConfig::parse_from(["test-app", "--catalog", path.to_str().expect("utf8")]);
    cfg.validate().expect("valid config");
    assert!(cfg.catalog.as_ref().is_some_and(|p| p.is_absolute()));
    let catalog = cfg.load_catalog().expect("catalog loads");
    assert_eq!(catalog.row_count(), 2);
    assert_eq!(catalog.get(1, 1), Some('D'));
    let _ = fs::remove_file(path);
}

#[test]
fn built_in_catalog_when_no_path() {
    let cfg = AppConfig::parse_from(["test-app"]);
    assert_eq!(cfg.load_catalog().expect("catalog").row_count(), 8);
}

#[test]
fn canonical_file_rejects_directories_and_oversized_files() {
    assert!(canonical_file(&env::temp_dir(), "--catalog", 1024).is_err());
    let path = temp_file("big.yaml", "rows: [\"ABCDEFGH\"]\n");
    assert!(canonical_file(&path, "--catalog", 4).is_err());
    assert!(canonical_file(&path, "--catalog", 1024).is_ok());
    let _ = fs::remove_file(path);
}
