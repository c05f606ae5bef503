//! Shop Translator command line entry point
//!
//! Usage: `shop-translator <id> [count] [placeholder=value ...]`

use anyhow::{bail, Context};
use tracing::info;

use shop_translator::{
    config::Settings,
    glossary::{self, TranslationParams},
    provider::{Application, ServiceProvider, TranslationServiceProvider},
    utils::logging,
};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", shop_translator::info());

    let mut args = std::env::args().skip(1);
    let Some(id) = args.next() else {
        bail!("usage: shop-translator <id> [count] [placeholder=value ...]");
    };

    let mut count = None;
    let mut parameters = TranslationParams::new();
    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) => {
                parameters.insert(key.to_string(), value.to_string());
            }
            None if count.is_none() => {
                count = Some(arg.parse::<i64>().with_context(|| format!("invalid count: {}", arg))?);
            }
            None => bail!("unexpected argument: {}", arg),
        }
    }

    let client = glossary::build_client(&settings)?;
    let provider = TranslationServiceProvider::new(client);
    let mut app = Application::new(settings.i18n.default_locale.clone());
    app.register_providers(&[&provider as &dyn ServiceProvider])?;

    let locale = Settings::locale_override();
    let translator = app.translator()?;
    let translator = translator
        .read()
        .map_err(|e| shop_translator::TranslatorError::LockPoisoned(e.to_string()))?;

    let result = match count {
        Some(count) => translator.translate_plural(&id, count, &parameters, None, locale.as_deref()),
        None => translator.translate(&id, &parameters, None, locale.as_deref()),
    };
    let text = result.map_err(|e| {
        logging::log_translator_error("translate", &e);
        e
    })?;

    println!("{}", text);
    Ok(())
}
