//! Error handling for the shop translator
//!
//! This module defines the error type shared by the translator adapter,
//! the glossary clients and the service provider.

use thiserror::Error;

/// Main error type for translation operations
#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Service not registered: {0}")]
    ServiceNotRegistered(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

impl TranslatorError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TranslatorError::InvalidInput(_) => false,
            TranslatorError::Config(_) => false,
            TranslatorError::Redis(_) => true,
            TranslatorError::Serialization(_) => false,
            TranslatorError::Io(_) => true,
            TranslatorError::ServiceNotRegistered(_) => false,
            TranslatorError::LockPoisoned(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TranslatorError::Config(_) => ErrorSeverity::Critical,
            TranslatorError::ServiceNotRegistered(_) => ErrorSeverity::Critical,
            TranslatorError::LockPoisoned(_) => ErrorSeverity::Critical,
            TranslatorError::InvalidInput(_) => ErrorSeverity::Info,
            TranslatorError::Redis(_) => ErrorSeverity::Warning,
            TranslatorError::Io(_) => ErrorSeverity::Warning,
            TranslatorError::Serialization(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
