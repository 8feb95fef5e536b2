use super::*;

#[test]
fn defaults_match_the_classic_rates() {
    let settings = Settings::default();
    assert_eq!(settings.default_baud, 9_600);
    assert_eq!(settings.tick_ms, 16);
    assert!(!settings.show_timestamps);
    assert_eq!(settings.baud_rates.first(), Some(&115_200));
    assert!(settings.baud_rates.contains(&9_600));
}

#[test]
fn ensure_creates_file_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".zport").join("settings.json");

    ensure_settings_file_at(&path).unwrap();
    assert!(path.exists());

    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded, Settings::default());
}

#[test]
fn ensure_does_not_clobber_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"default_baud": 115200}"#).unwrap();

    ensure_settings_file_at(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.default_baud, 115_200);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"show_timestamps": true}"#).unwrap();

    let loaded = load_settings_from(&path).unwrap();
    assert!(loaded.show_timestamps);
    assert_eq!(loaded.default_baud, 9_600);
    assert_eq!(loaded.tick_ms, 16);
}

#[test]
fn unreadable_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert!(load_settings_from(&path).is_none());

    std::fs::write(&path, "not json").unwrap();
    assert!(load_settings_from(&path).is_none());
}
