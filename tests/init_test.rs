//! Integration test for library initialization.
//!
//! Kept in its own test binary because it installs the global subscriber.

use std::fs;

use kilo_keywords::error::KiloError;
use kilo_keywords::KeywordMatcher;
use tempfile::tempdir;

#[test]
fn test_init_loads_config_and_installs_logging() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kilo.toml");
    fs::write(
        &path,
        "[matcher]\ncase_sensitive = true\n\n[log]\nlevel = \"debug\"\njson = true\nsource_location = false\n",
    )
    .unwrap();

    let config = kilo_keywords::init(Some(path.as_path())).unwrap();
    assert!(config.matcher.case_sensitive);
    assert_eq!(config.log.level, "debug");

    let mut matcher = KeywordMatcher::from_config(&config.matcher);
    matcher.add_keyword_with("Kilo", "kilo").unwrap();
    assert_eq!(matcher.replace("Kilo kilo"), "kilo kilo");

    // The global subscriber can only be installed once.
    let err = kilo_keywords::init(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, KiloError::Logging(_)));
}
