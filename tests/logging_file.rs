use std::{fs, thread::sleep, time::Duration};

use tempfile::tempdir;

// Sole logging::init in this binary, so the file subscriber is the global one.
#[test]
fn writes_log_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.txt");

    dash_forge::logging::init(true, Some(path.clone()));
    tracing::info!("dash_forge logging test");

    sleep(Duration::from_millis(100));

    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("dash_forge logging test"));
}
