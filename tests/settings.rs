use dash_forge::settings::Settings;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn missing_or_empty_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("settings.json");
    assert_eq!(Settings::load(missing.to_str().unwrap()).unwrap(), Settings::default());

    std::fs::write(&missing, "  \n").unwrap();
    assert_eq!(Settings::load(missing.to_str().unwrap()).unwrap(), Settings::default());
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "debug_logging": true, "export_delay_ms": 10 }"#).unwrap();
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.debug_logging);
    assert!(settings.enable_toasts);
    assert_eq!(settings.export_delay(), Duration::from_millis(10));
    assert_eq!(settings.connect_delay(), Duration::ZERO);
    assert_eq!(settings.window_size, Some((1200, 860)));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();
    let settings = Settings {
        log_file: Some("dash.log".into()),
        toast_duration: 5.0,
        window_size: Some((100, 100)),
        ..Settings::default()
    };
    settings.save(path).unwrap();
    let loaded = Settings::load(path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.window_size(), (640.0, 480.0));
    assert_eq!(loaded.log_path().unwrap().to_str(), Some("dash.log"));
}
