use super::*;
use tempfile::tempdir;

#[test]
fn test_write_default_then_read_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".unimart").join("settings.json");

    write_default_if_missing(&path).unwrap();

    assert!(path.exists());
    assert_eq!(read_settings(&path).unwrap(), Settings::default());
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"load_timeout_ms": 250}"#).unwrap();

    write_default_if_missing(&path).unwrap();

    assert_eq!(read_settings(&path).unwrap().load_timeout_ms, 250);
}

#[test]
fn test_malformed_file_is_invalid_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = read_settings(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
