//! Config file loading from disk.

use std::io::Write;

use resalloc_core::{ConfigError, LogFormat, ResallocConfig, Thresholds};

#[test]
fn loads_thresholds_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[thresholds]\ncpu_threshold = 65.5\nmemory_threshold = 50.0\n\n[logging]\nformat = \"json\""
    )
    .unwrap();

    let config = ResallocConfig::from_file(file.path()).unwrap();
    assert_eq!(config.thresholds, Thresholds::new(65.5, 50.0));
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn missing_file_is_read_error_naming_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = ResallocConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn wrong_type_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[thresholds]\ncpu_threshold = \"high\"").unwrap();

    let err = ResallocConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
