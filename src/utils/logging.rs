//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for translation lookups.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, TranslatorError, Result};

/// Initialize logging based on configuration
///
/// When a log file path is configured the returned guard must be kept alive,
/// otherwise buffered lines are lost when it drops.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| TranslatorError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let guard = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "shop-translator.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
                .try_init()
                .map_err(|e| TranslatorError::Config(format!("Logging already initialized: {}", e)))?;

            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| TranslatorError::Config(format!("Logging already initialized: {}", e)))?;

            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a glossary lookup that found no translation
pub fn log_translation_miss(backend: &str, id: &str, locale: &str) {
    debug!(
        backend = backend,
        id = id,
        locale = locale,
        "Glossary key not found, returning identifier"
    );
}

/// Log a plural request for an identifier without a plural form
pub fn log_plural_rejected(id: &str, count: i64) {
    warn!(
        id = id,
        count = count,
        "Message cannot be pluralized"
    );
}

/// Log service provider registration
pub fn log_service_registered(service: &str, locale: Option<&str>, replaced: bool) {
    if replaced {
        warn!(
            service = service,
            locale = locale,
            "Service re-registered, previous instance replaced"
        );
    } else {
        info!(
            service = service,
            locale = locale,
            "Service registered"
        );
    }
}

/// Log a translator error at the level matching its severity
pub fn log_translator_error(context: &str, err: &TranslatorError) {
    let severity = err.severity();
    let recoverable = err.is_recoverable();

    match severity {
        ErrorSeverity::Info => info!(context = context, %severity, recoverable, error = %err, "Translator error"),
        ErrorSeverity::Warning => warn!(context = context, %severity, recoverable, error = %err, "Translator error"),
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            error!(context = context, %severity, recoverable, error = %err, "Translator error")
        }
    }
}
