//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `SHOP_TRANSLATOR_I18N__DEFAULT_LOCALE`
pub const ENV_PREFIX: &str = "SHOP_TRANSLATOR";

/// Per-run locale override for the CLI, outside the `ENV_PREFIX` namespace
pub const LOCALE_OVERRIDE_ENV: &str = "TRANSLATOR_LOCALE";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub glossary: GlossaryConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_locale: String,
    pub supported_locales: Vec<String>,
}

/// Glossary storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GlossaryConfig {
    /// Either `file` or `redis`
    pub backend: String,
    pub redis_url: String,
    pub key_prefix: String,
    /// Directory holding `<locale>.json` files for the file backend
    pub directory: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stderr only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from an explicit file, still honouring environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Locale named by `TRANSLATOR_LOCALE` (environment or `.env`), if set
    pub fn locale_override() -> Option<String> {
        dotenv::var(LOCALE_OVERRIDE_ENV)
            .ok()
            .filter(|locale| !locale.is_empty())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TranslatorError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            i18n: I18nConfig {
                default_locale: "en_US".to_string(),
                supported_locales: vec!["en_US".to_string(), "de_DE".to_string()],
            },
            glossary: GlossaryConfig {
                backend: "file".to_string(),
                redis_url: "redis://localhost:6379".to_string(),
                key_prefix: "kv:".to_string(),
                directory: "translations".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
