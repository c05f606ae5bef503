//! Shared test support
//!
//! Provides a glossary client that records every lookup so tests can assert
//! exactly what the translator delegated.

#![allow(dead_code)]

use std::sync::{Mutex, Once};

use shop_translator::{GlossaryClient, Result, TranslationParams, TranslatorError};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// A single recorded glossary lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub id: String,
    pub locale: Option<String>,
    pub parameters: TranslationParams,
}

/// Glossary client answering `<locale>:<id>` and remembering each call
#[derive(Debug, Default)]
pub struct RecordingGlossaryClient {
    calls: Mutex<Vec<RecordedCall>>,
    fail_with: Option<String>,
}

impl RecordingGlossaryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose every lookup fails with a service error
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().last().cloned().expect("no glossary call recorded")
    }
}

impl GlossaryClient for RecordingGlossaryClient {
    fn translate(&self, id: &str, locale: Option<&str>, parameters: &TranslationParams) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            id: id.to_string(),
            locale: locale.map(str::to_string),
            parameters: parameters.clone(),
        });

        if let Some(message) = &self.fail_with {
            return Err(TranslatorError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message.clone(),
            )));
        }

        Ok(format!("{}:{}", locale.unwrap_or("-"), id))
    }
}

/// Build parameters from `(placeholder, value)` pairs
pub fn params(pairs: &[(&str, &str)]) -> TranslationParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
