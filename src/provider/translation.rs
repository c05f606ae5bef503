//! Translator registration

use std::sync::{Arc, RwLock};
use super::{Application, ServiceProvider, SharedTranslator};
use crate::glossary::GlossaryClient;
use crate::translator::GlossaryTranslator;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Name the translator service is known by in logs and errors
pub const SERVICE_TRANSLATOR: &str = "translator";

/// Installs a glossary-backed translator bound to the application locale
pub struct TranslationServiceProvider {
    client: Arc<dyn GlossaryClient>,
}

impl TranslationServiceProvider {
    pub fn new(client: Arc<dyn GlossaryClient>) -> Self {
        Self { client }
    }
}

impl ServiceProvider for TranslationServiceProvider {
    fn register(&self, app: &mut Application) -> Result<()> {
        let locale = app.locale().map(str::to_string);
        let translator = GlossaryTranslator::new(Arc::clone(&self.client), locale);
        let shared: SharedTranslator = Arc::new(RwLock::new(translator));

        let replaced = app.set_translator(shared).is_some();
        logging::log_service_registered(SERVICE_TRANSLATOR, app.locale(), replaced);

        Ok(())
    }

    fn boot(&self, _app: &Application) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::MemoryGlossaryClient;

    fn create_provider() -> TranslationServiceProvider {
        let mut glossary = MemoryGlossaryClient::new("en_US");
        glossary.insert("de_DE", "greeting", "Hallo");
        TranslationServiceProvider::new(Arc::new(glossary))
    }

    #[test]
    fn test_register_binds_application_locale() {
        let mut app = Application::new("de_DE");
        create_provider().register(&mut app).unwrap();

        let translator = app.translator().unwrap();
        let translator = translator.read().unwrap();
        assert_eq!(translator.locale(), Some("de_DE"));
        assert_eq!(translator.translate("greeting", &Default::default(), None, None).unwrap(), "Hallo");
    }

    #[test]
    fn test_boot_is_noop() {
        let app = Application::new("en_US");
        assert!(create_provider().boot(&app).is_ok());
        assert!(app.translator().is_err());
    }
}
