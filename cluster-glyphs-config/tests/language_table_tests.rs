//! Integration tests for loading language tables from disk.

use std::fs;

use cluster_glyphs_config::{ConfigError, DiacriticSettings, LanguageTable, keys};
use tempfile::TempDir;

#[test]
fn test_load_toml_language_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hi.toml");
    fs::write(
        &path,
        r#"
menu_start = "शुरू"
diacritics_joinable_range = "\"ऀॿ\""
left_joining_diacritics = "\" ा ि \""
"#,
    )
    .unwrap();

    let table = LanguageTable::load(&path).unwrap();
    assert_eq!(table.get("menu_start"), Some("शुरू"));

    let settings = DiacriticSettings::from_table(&table);
    assert_eq!(settings.joinable_range, Some(('ऀ', 'ॿ')));
    assert_eq!(settings.left_joiners, "ाि");
    assert!(settings.right_joiners.is_empty());
    assert!(settings.has_joiners());
}

#[test]
fn test_load_yaml_language_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("th.yml");
    fs::write(&path, "menu_quit: ออก\nleft_and_right_joiners: '\" ั \"'\n").unwrap();

    let table = LanguageTable::load(&path).unwrap();
    let settings = DiacriticSettings::from_table(&table);
    assert_eq!(settings.left_and_right_joiners, "ั");
    assert_eq!(settings.joinable_range, None);
}

#[test]
fn test_load_missing_file_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = LanguageTable::load(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io(_))
    ));
}

#[test]
fn test_load_unknown_extension_is_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lang.ini");
    fs::write(&path, "a = b\n").unwrap();

    let err = LanguageTable::load(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "menu_start = \n").unwrap();

    let err = LanguageTable::load(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Toml(_))
    ));
}

#[test]
fn test_setting_keys_are_recognized() {
    for key in keys::ALL {
        assert!(keys::is_setting_key(key));
    }
    assert!(!keys::is_setting_key("menu_start"));
}

#[test]
fn test_setting_keys_follow_table_order() {
    let table: LanguageTable = keys::ALL.iter().map(|&key| (key, "")).collect();
    let ordered: Vec<&str> = table.iter().map(|(key, _)| key).collect();
    assert_eq!(ordered, keys::ALL);
}
