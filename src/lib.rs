//! Shop Translator
//!
//! Translation adapter for storefront templates. Templates call a
//! [`Translator`], which resolves the locale and plural form of a message and
//! looks the text up through a glossary storage client. A service provider
//! builds the shared translator at application startup.

pub mod config;
pub mod glossary;
pub mod provider;
pub mod translator;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{TranslatorError, Result};

// Re-export main components for easy access
pub use glossary::{GlossaryClient, MemoryGlossaryClient, RedisGlossaryClient, TranslationParams};
pub use provider::{Application, ServiceProvider, SharedTranslator, TranslationServiceProvider};
pub use translator::{GlossaryTranslator, Translator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
