//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{TranslatorError, Result};
use super::Settings;

/// Glossary backends understood by `glossary::build_client`
pub const SUPPORTED_BACKENDS: [&str; 2] = ["file", "redis"];

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_glossary_config(&settings.glossary)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(TranslatorError::Config(
            "Default locale is required".to_string()
        ));
    }

    if config.supported_locales.is_empty() {
        return Err(TranslatorError::Config(
            "At least one supported locale is required".to_string()
        ));
    }

    if !config.supported_locales.contains(&config.default_locale) {
        return Err(TranslatorError::Config(
            "Default locale must be in supported locales list".to_string()
        ));
    }

    Ok(())
}

/// Validate glossary storage configuration
fn validate_glossary_config(config: &super::GlossaryConfig) -> Result<()> {
    match config.backend.as_str() {
        "redis" => {
            if config.redis_url.is_empty() {
                return Err(TranslatorError::Config(
                    "Redis URL is required for the redis glossary backend".to_string()
                ));
            }
        }
        "file" => {
            if config.directory.is_empty() {
                return Err(TranslatorError::Config(
                    "Glossary directory is required for the file glossary backend".to_string()
                ));
            }
        }
        other => {
            return Err(TranslatorError::Config(
                format!("Unknown glossary backend: {}. Valid backends: {:?}", other, SUPPORTED_BACKENDS)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TranslatorError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TranslatorError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
