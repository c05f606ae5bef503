//! Translation adapter
//!
//! Templates translate through the [`Translator`] capability. The shipped
//! implementation, [`GlossaryTranslator`], picks a locale and a plural form
//! and leaves the actual lookup to a glossary client.

pub mod glossary_translator;

use crate::glossary::TranslationParams;
use crate::utils::errors::Result;

pub use glossary_translator::{GlossaryTranslator, PLURAL_SEPARATOR};

/// Translation operations available to the templating layer
pub trait Translator: Send + Sync {
    /// Translate `id`; `locale` overrides the default for this call only.
    /// `domain` is accepted for compatibility and does not affect lookup.
    fn translate(
        &self,
        id: &str,
        parameters: &TranslationParams,
        domain: Option<&str>,
        locale: Option<&str>,
    ) -> Result<String>;

    /// Translate a `"singular|plural"` id, choosing the form from `count`
    fn translate_plural(
        &self,
        id: &str,
        count: i64,
        parameters: &TranslationParams,
        domain: Option<&str>,
        locale: Option<&str>,
    ) -> Result<String>;

    /// Replace the default locale, returning the translator for chaining
    fn set_locale(&mut self, locale: String) -> &mut dyn Translator;

    /// Current default locale
    fn locale(&self) -> Option<&str>;
}

impl std::fmt::Debug for dyn Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale())
            .finish_non_exhaustive()
    }
}
