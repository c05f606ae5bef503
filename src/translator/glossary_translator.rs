//! Glossary-backed translator

use tracing::debug;
use super::Translator;
use crate::glossary::{GlossaryClient, TranslationParams};
use crate::utils::errors::{TranslatorError, Result};
use crate::utils::logging;

/// Separates the singular and plural forms of a message id
pub const PLURAL_SEPARATOR: char = '|';

/// Translator delegating every lookup to a [`GlossaryClient`]
#[derive(Debug, Clone)]
pub struct GlossaryTranslator<C> {
    client: C,
    locale: Option<String>,
}

impl<C: GlossaryClient> GlossaryTranslator<C> {
    /// Create a translator; with no locale the client's own default applies
    pub fn new(client: C, locale: Option<String>) -> Self {
        Self { client, locale }
    }

    /// Replace the default locale, returning `self` for chaining
    pub fn set_locale(&mut self, locale: impl Into<String>) -> &mut Self {
        self.locale = Some(locale.into());
        self
    }

    /// Current default locale
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn resolve_locale<'a>(&'a self, locale: Option<&'a str>) -> Option<&'a str> {
        locale.or(self.locale.as_deref())
    }
}

/// Pick the message id for `count`: the first form for exactly one, the
/// second form otherwise
fn select_plural_form(id: &str, count: i64) -> Result<&str> {
    let mut forms = id.split(PLURAL_SEPARATOR);
    let singular = forms.next().unwrap_or(id);

    if count == 1 {
        return Ok(singular);
    }

    forms.next().ok_or_else(|| {
        logging::log_plural_rejected(id, count);
        TranslatorError::InvalidInput(format!(
            "The message \"{}\" cannot be pluralized, because it is missing a plural (e.g. \"There is one apple|There are %count% apples\").",
            id
        ))
    })
}

impl<C: GlossaryClient> Translator for GlossaryTranslator<C> {
    fn translate(
        &self,
        id: &str,
        parameters: &TranslationParams,
        _domain: Option<&str>,
        locale: Option<&str>,
    ) -> Result<String> {
        let locale = self.resolve_locale(locale);
        debug!(id = id, locale = locale, "Translating message");

        self.client.translate(id, locale, parameters)
    }

    fn translate_plural(
        &self,
        id: &str,
        count: i64,
        parameters: &TranslationParams,
        _domain: Option<&str>,
        locale: Option<&str>,
    ) -> Result<String> {
        let locale = self.resolve_locale(locale);
        let selected = select_plural_form(id, count)?;
        debug!(id = selected, count = count, locale = locale, "Translating plural message");

        self.client.translate(selected, locale, parameters)
    }

    fn set_locale(&mut self, locale: String) -> &mut dyn Translator {
        GlossaryTranslator::set_locale(self, locale)
    }

    fn locale(&self) -> Option<&str> {
        GlossaryTranslator::locale(self)
    }
}
