//! Glossary storage clients
//!
//! The translator never reads translations itself; it hands every lookup to a
//! [`GlossaryClient`]. This module defines that contract and the backends
//! shipped with the crate: a Redis key-value store and an in-memory glossary
//! loaded from JSON files.

pub mod memory;
pub mod redis;

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use crate::config::Settings;
use crate::utils::errors::{TranslatorError, Result};
use crate::utils::logging;

pub use memory::{MemoryGlossaryClient, GlossaryStats, LocaleStats};
pub use self::redis::RedisGlossaryClient;

/// Translation parameters, keyed by the literal placeholder (e.g. `%count%`)
pub type TranslationParams = HashMap<String, String>;

/// Key-value lookup service resolving a message id and locale to text
pub trait GlossaryClient: Send + Sync {
    /// Resolve `id` for `locale` (the backend default when `None`) and apply
    /// `parameters`. Unknown ids resolve to themselves.
    fn translate(&self, id: &str, locale: Option<&str>, parameters: &TranslationParams) -> Result<String>;
}

impl<C: GlossaryClient + ?Sized> GlossaryClient for Arc<C> {
    fn translate(&self, id: &str, locale: Option<&str>, parameters: &TranslationParams) -> Result<String> {
        (**self).translate(id, locale, parameters)
    }
}

impl<C: GlossaryClient + ?Sized> GlossaryClient for Box<C> {
    fn translate(&self, id: &str, locale: Option<&str>, parameters: &TranslationParams) -> Result<String> {
        (**self).translate(id, locale, parameters)
    }
}

/// Replace every parameter key found in `template` with its value
///
/// Single left-to-right pass: at each position the longest matching key
/// wins, and substituted values are never scanned again.
pub fn apply_parameters(template: &str, parameters: &TranslationParams) -> String {
    let mut keys: Vec<(&str, &str)> = parameters
        .iter()
        .filter(|(placeholder, _)| !placeholder.is_empty())
        .map(|(placeholder, value)| (placeholder.as_str(), value.as_str()))
        .collect();
    if keys.is_empty() {
        return template.to_string();
    }
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(ch) = rest.chars().next() {
        match keys.iter().find(|(placeholder, _)| rest.starts_with(placeholder)) {
            Some((placeholder, value)) => {
                result.push_str(value);
                rest = &rest[placeholder.len()..];
            }
            None => {
                result.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    result
}

/// Build the glossary client selected by `glossary.backend`
pub fn build_client(settings: &Settings) -> Result<Arc<dyn GlossaryClient>> {
    let glossary = &settings.glossary;

    match glossary.backend.as_str() {
        "redis" => {
            info!(url = %glossary.redis_url, "Using redis glossary backend");
            let client = RedisGlossaryClient::new(
                &glossary.redis_url,
                &glossary.key_prefix,
                &settings.i18n.default_locale,
            )?;
            // Lookups report their own failures; startup only warns
            match client.health_check() {
                Ok(true) => info!("Redis glossary backend reachable"),
                Ok(false) => warn!("Redis glossary backend gave an unexpected PING reply"),
                Err(e) => logging::log_translator_error("glossary health check", &e),
            }
            Ok(Arc::new(client))
        }
        "file" => {
            info!(directory = %glossary.directory, "Using file glossary backend");
            let client = MemoryGlossaryClient::load_directory(
                &glossary.directory,
                &settings.i18n.default_locale,
                &settings.i18n.supported_locales,
            )?;
            Ok(Arc::new(client))
        }
        other => Err(TranslatorError::Config(format!("Unknown glossary backend: {}", other))),
    }
}
