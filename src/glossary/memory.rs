//! In-memory glossary
//!
//! Holds translations per locale in a map. Translations can be inserted
//! directly or loaded from a directory of `<locale>.json` files, where nested
//! objects become dotted keys (`{"cart": {"title": "Cart"}}` -> `cart.title`).

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};
use super::{apply_parameters, GlossaryClient, TranslationParams};
use crate::utils::errors::{TranslatorError, Result};
use crate::utils::logging;

/// Glossary held entirely in memory
#[derive(Debug, Clone)]
pub struct MemoryGlossaryClient {
    /// Translations by locale, then by message id
    translations: HashMap<String, HashMap<String, String>>,
    /// Locale used when a lookup does not name one
    default_locale: String,
}

/// Glossary statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryStats {
    pub locales: Vec<LocaleStats>,
    pub total_keys: usize,
}

/// Locale-specific statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStats {
    pub locale: String,
    pub key_count: usize,
}

impl MemoryGlossaryClient {
    /// Create an empty glossary
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            translations: HashMap::new(),
            default_locale: default_locale.into(),
        }
    }

    /// Add or replace a single translation
    pub fn insert(&mut self, locale: impl Into<String>, id: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.translations
            .entry(locale.into())
            .or_default()
            .insert(id.into(), text.into());
        self
    }

    /// Load `<dir>/<locale>.json` for every locale in `locales`
    ///
    /// A missing or broken file is fatal for the default locale and only
    /// logged for the others.
    pub fn load_directory(dir: impl AsRef<Path>, default_locale: &str, locales: &[String]) -> Result<Self> {
        let dir = dir.as_ref();
        let mut glossary = Self::new(default_locale);

        for locale in locales {
            let file_path = dir.join(format!("{}.json", locale));

            if !file_path.exists() {
                warn!("Glossary file not found: {}", file_path.display());
                if locale == default_locale {
                    return Err(TranslatorError::Config(
                        format!("Default locale glossary file not found: {}", file_path.display())
                    ));
                }
                continue;
            }

            match glossary.load_locale_file(&file_path, locale) {
                Ok(count) => info!("Loaded {} glossary keys for locale: {}", count, locale),
                Err(e) => {
                    if locale == default_locale {
                        return Err(TranslatorError::Config(
                            format!("Failed to load default locale glossary: {}", e)
                        ));
                    }
                    warn!("Failed to load glossary for {}: {}", locale, e);
                }
            }
        }

        Ok(glossary)
    }

    /// Load a single locale file, returning the number of keys read
    fn load_locale_file(&mut self, file_path: &Path, locale: &str) -> Result<usize> {
        let content = fs::read_to_string(file_path)?;
        let value: Value = serde_json::from_str(&content)?;

        let Value::Object(map) = value else {
            return Err(TranslatorError::Config(
                format!("Invalid glossary file format for {}", locale)
            ));
        };

        let mut entries = HashMap::new();
        flatten_into(&map, "", &mut entries)?;
        let count = entries.len();

        self.translations.insert(locale.to_string(), entries);
        debug!(locale = locale, keys = count, "Glossary file parsed");
        Ok(count)
    }

    /// Get glossary statistics
    pub fn stats(&self) -> GlossaryStats {
        let mut locales: Vec<LocaleStats> = self
            .translations
            .iter()
            .map(|(locale, entries)| LocaleStats {
                locale: locale.clone(),
                key_count: entries.len(),
            })
            .collect();
        locales.sort_by(|a, b| a.locale.cmp(&b.locale));

        let total_keys = locales.iter().map(|l| l.key_count).sum();
        GlossaryStats { locales, total_keys }
    }
}

/// Recursively flatten nested JSON objects into dotted keys
fn flatten_into(obj: &Map<String, Value>, prefix: &str, out: &mut HashMap<String, String>) -> Result<()> {
    for (key, value) in obj {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::String(text) => {
                out.insert(full_key, text.clone());
            }
            Value::Object(nested) => flatten_into(nested, &full_key, out)?,
            other => {
                return Err(TranslatorError::Config(
                    format!("Glossary key '{}' must map to a string, found {}", full_key, other)
                ));
            }
        }
    }
    Ok(())
}

impl GlossaryClient for MemoryGlossaryClient {
    fn translate(&self, id: &str, locale: Option<&str>, parameters: &TranslationParams) -> Result<String> {
        let locale = locale.unwrap_or(&self.default_locale);

        match self.translations.get(locale).and_then(|entries| entries.get(id)) {
            Some(text) => Ok(apply_parameters(text, parameters)),
            None => {
                logging::log_translation_miss("memory", id, locale);
                Ok(id.to_string())
            }
        }
    }
}
