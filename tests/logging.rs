use std::{thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn init_without_file_creates_no_log() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.txt");

    dash_forge::logging::init(false, None);
    tracing::info!("test");

    sleep(Duration::from_millis(100));

    assert!(!path.exists(), "log file should not be created");
}

#[test]
#[serial]
fn second_init_leaves_filesystem_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("late.txt");

    dash_forge::logging::init(false, None);
    dash_forge::logging::init(true, Some(path.clone()));
    tracing::info!("after second init");

    sleep(Duration::from_millis(100));

    assert!(!path.exists(), "a second init must not create its log file");
}

#[test]
fn release_filter_is_info() {
    assert_eq!(dash_forge::logging::build_filter(false).to_string(), "info");
}
