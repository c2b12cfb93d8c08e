//! Tests for log path handling and subscriber initialization.

use super::*;
use serial_test::serial;
use std::fs;

#[test]
fn split_log_path_separates_directory_and_file() {
    let (dir, file) = split_log_path(Path::new("/var/log/artscout/artscout.log")).unwrap();
    assert_eq!(dir, PathBuf::from("/var/log/artscout"));
    assert_eq!(file, "artscout.log");
}

#[test]
fn split_log_path_bare_file_uses_current_directory() {
    let (dir, file) = split_log_path(Path::new("artscout.log")).unwrap();
    assert_eq!(dir, PathBuf::from("."));
    assert_eq!(file, "artscout.log");
}

#[test]
fn split_log_path_rejects_path_without_file_name() {
    assert!(matches!(
        split_log_path(Path::new("/")),
        Err(LoggingError::InvalidPath(_))
    ));
}

#[test]
#[serial(rust_log)]
fn env_filter_falls_back_to_info() {
    std::env::remove_var("RUST_LOG");
    assert_eq!(env_filter().to_string(), DEFAULT_FILTER);
}

#[test]
#[serial(rust_log)]
fn env_filter_respects_rust_log() {
    std::env::set_var("RUST_LOG", "artscout=debug");
    let filter = env_filter();
    std::env::remove_var("RUST_LOG");
    assert_eq!(filter.to_string(), "artscout=debug");
}

#[test]
#[serial(tracing_init)]
fn init_creates_log_directory_if_missing() {
    let test_dir = std::env::temp_dir().join("artscout_test_logs_create");
    let log_file = test_dir.join("test.log");
    let _ = fs::remove_dir_all(&test_dir);

    // The subscriber may already be set by another test; the directory is
    // created before that check.
    let _guard = init(&log_file);

    assert!(
        test_dir.exists(),
        "Log directory should be created: {:?}",
        test_dir
    );

    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
#[serial(tracing_init)]
fn second_init_reports_subscriber_already_set() {
    let test_dir = std::env::temp_dir().join("artscout_test_logs_twice");
    let log_file = test_dir.join("twice.log");

    let _first = init(&log_file);
    let second = init(&log_file);

    assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
    let _ = fs::remove_dir_all(&test_dir);
}
