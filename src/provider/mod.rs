//! Service providers
//!
//! A provider installs a service into the [`Application`] at startup. The
//! application holds services in typed slots and hands out shared handles,
//! so components receive their dependencies explicitly instead of looking
//! them up by name.

pub mod translation;

use std::sync::{Arc, RwLock};
use crate::translator::Translator;
use crate::utils::errors::{TranslatorError, Result};

pub use translation::{TranslationServiceProvider, SERVICE_TRANSLATOR};

/// Translator shared by every component in the process
pub type SharedTranslator = Arc<RwLock<dyn Translator>>;

/// Startup hooks a provider implements
pub trait ServiceProvider {
    /// Construct services and install them into `app`
    fn register(&self, app: &mut Application) -> Result<()>;

    /// Run after every provider has registered
    fn boot(&self, app: &Application) -> Result<()>;
}

/// Host application state shared with service providers
#[derive(Default)]
pub struct Application {
    locale: Option<String>,
    translator: Option<SharedTranslator>,
}

impl Application {
    /// Create an application with the host's default locale
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            translator: None,
        }
    }

    /// Host default locale
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Install the shared translator, returning the instance it replaced
    pub fn set_translator(&mut self, translator: SharedTranslator) -> Option<SharedTranslator> {
        self.translator.replace(translator)
    }

    /// Handle to the shared translator; every call returns the same instance
    pub fn translator(&self) -> Result<SharedTranslator> {
        self.translator
            .clone()
            .ok_or_else(|| TranslatorError::ServiceNotRegistered(SERVICE_TRANSLATOR.to_string()))
    }

    /// Register then boot each provider in order
    pub fn register_providers(&mut self, providers: &[&dyn ServiceProvider]) -> Result<()> {
        for provider in providers {
            provider.register(self)?;
        }
        for provider in providers {
            provider.boot(self)?;
        }
        Ok(())
    }
}
