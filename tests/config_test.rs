//! Settings loading from files and environment variables

use std::fs;

use serial_test::serial;
use shop_translator::config::settings::{ENV_PREFIX, LOCALE_OVERRIDE_ENV};
use shop_translator::Settings;

#[test]
#[serial]
fn test_defaults_without_config_file() {
    let settings = Settings::new().expect("default settings should load");

    assert_eq!(settings.i18n.default_locale, "en_US");
    assert_eq!(settings.glossary.backend, "file");
    assert_eq!(settings.glossary.key_prefix, "kv:");
    assert!(settings.logging.file_path.is_none());
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_from_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[i18n]
default_locale = "de_DE"
supported_locales = ["de_DE", "en_US"]

[glossary]
backend = "redis"
redis_url = "redis://cache:6379/2"
"#,
    )
    .unwrap();

    let settings = Settings::from_file(&path).unwrap();

    assert_eq!(settings.i18n.default_locale, "de_DE");
    assert_eq!(settings.glossary.backend, "redis");
    assert_eq!(settings.glossary.redis_url, "redis://cache:6379/2");
    // untouched keys keep their defaults
    assert_eq!(settings.glossary.key_prefix, "kv:");
    assert_eq!(settings.logging.level, "info");
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_environment_overrides() {
    std::env::set_var("SHOP_TRANSLATOR_I18N__DEFAULT_LOCALE", "de_DE");
    std::env::set_var("SHOP_TRANSLATOR_LOGGING__LEVEL", "debug");

    let settings = Settings::new();

    std::env::remove_var("SHOP_TRANSLATOR_I18N__DEFAULT_LOCALE");
    std::env::remove_var("SHOP_TRANSLATOR_LOGGING__LEVEL");

    let settings = settings.unwrap();
    assert_eq!(settings.i18n.default_locale, "de_DE");
    assert_eq!(settings.logging.level, "debug");
}

#[test]
#[serial]
fn test_invalid_file_settings_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[i18n]\ndefault_locale = \"pt_BR\"\n").unwrap();

    let settings = Settings::from_file(&path).unwrap();

    assert!(settings.validate().is_err());
}

#[test]
#[serial]
fn test_locale_override_outside_config_namespace() {
    assert!(!LOCALE_OVERRIDE_ENV.starts_with(ENV_PREFIX));

    std::env::set_var(LOCALE_OVERRIDE_ENV, "de_DE");
    let locale = Settings::locale_override();
    let settings = Settings::new();
    std::env::remove_var(LOCALE_OVERRIDE_ENV);

    assert_eq!(locale.as_deref(), Some("de_DE"));
    assert_eq!(settings.unwrap().i18n.default_locale, "en_US");
}

#[test]
#[serial]
fn test_locale_override_unset_or_empty() {
    std::env::remove_var(LOCALE_OVERRIDE_ENV);
    assert_eq!(Settings::locale_override(), None);

    std::env::set_var(LOCALE_OVERRIDE_ENV, "");
    let locale = Settings::locale_override();
    std::env::remove_var(LOCALE_OVERRIDE_ENV);

    assert_eq!(locale, None);
}
