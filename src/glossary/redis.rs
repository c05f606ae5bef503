//! Redis glossary client
//!
//! Reads translations from the key-value store populated by the storefront's
//! glossary export. Keys look like `kv:translation.de_de.cart.title` and hold
//! either a JSON string or a JSON object with a `value` field.

use std::sync::Mutex;
use ::redis::{Client, Commands, Connection, RedisResult};
use serde_json::Value;
use tracing::debug;
use super::{apply_parameters, GlossaryClient, TranslationParams};
use crate::utils::errors::{TranslatorError, Result};
use crate::utils::logging;

/// Glossary client backed by Redis
///
/// One connection is kept open and reused across lookups; it is dropped
/// after a failed command and re-established on the next call.
pub struct RedisGlossaryClient {
    client: Client,
    connection: Mutex<Option<Connection>>,
    key_prefix: String,
    default_locale: String,
}

impl RedisGlossaryClient {
    /// Create a new client; no connection is made until the first lookup
    pub fn new(url: &str, key_prefix: &str, default_locale: &str) -> Result<Self> {
        let client = Client::open(url)?;

        Ok(Self {
            client,
            connection: Mutex::new(None),
            key_prefix: key_prefix.to_string(),
            default_locale: default_locale.to_string(),
        })
    }

    /// Storage key for a message id in a locale
    pub fn storage_key(&self, id: &str, locale: &str) -> String {
        format!("{}translation.{}.{}", self.key_prefix, locale.to_lowercase(), id)
    }

    /// Check the connection with `PING`
    pub fn health_check(&self) -> Result<bool> {
        let pong: String = self.with_connection(|conn| ::redis::cmd("PING").query(conn))?;
        Ok(pong == "PONG")
    }

    /// Run `command` on the cached connection, opening one if needed
    fn with_connection<T>(&self, command: impl FnOnce(&mut Connection) -> RedisResult<T>) -> Result<T> {
        let mut cached = self
            .connection
            .lock()
            .map_err(|e| TranslatorError::LockPoisoned(e.to_string()))?;

        let mut conn = match cached.take() {
            Some(conn) => conn,
            None => {
                debug!("Opening Redis glossary connection");
                self.client.get_connection()?
            }
        };

        let result = command(&mut conn);
        if result.is_ok() {
            *cached = Some(conn);
        }
        Ok(result?)
    }
}

/// Turn a stored value (or its absence) into the translated text
fn resolve(id: &str, locale: &str, stored: Option<String>, parameters: &TranslationParams) -> Result<String> {
    match stored {
        Some(raw) => {
            let text = decode_value(&raw)?;
            Ok(apply_parameters(&text, parameters))
        }
        None => {
            logging::log_translation_miss("redis", id, locale);
            Ok(id.to_string())
        }
    }
}

fn malformed(msg: &str) -> TranslatorError {
    TranslatorError::Serialization(<serde_json::Error as serde::de::Error>::custom(msg))
}

/// Extract the translation text from a stored JSON value
fn decode_value(raw: &str) -> Result<String> {
    match serde_json::from_str::<Value>(raw)? {
        Value::String(text) => Ok(text),
        Value::Object(mut obj) => match obj.remove("value") {
            Some(Value::String(text)) => Ok(text),
            _ => Err(malformed("glossary entry object has no string 'value' field")),
        },
        other => Err(malformed(&format!("unsupported glossary entry: {}", other))),
    }
}

impl GlossaryClient for RedisGlossaryClient {
    fn translate(&self, id: &str, locale: Option<&str>, parameters: &TranslationParams) -> Result<String> {
        let locale = locale.unwrap_or(&self.default_locale);
        let key = self.storage_key(id, locale);

        let stored: Option<String> = self.with_connection(|conn| conn.get(&key))?;
        debug!(key = %key, found = stored.is_some(), "Glossary key fetched from Redis");

        resolve(id, locale, stored, parameters)
    }
}
