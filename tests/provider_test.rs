//! Translator registration through the service provider

mod helpers;

use std::sync::Arc;

use assert_matches::assert_matches;
use shop_translator::{
    Application, GlossaryClient, ServiceProvider, TranslationParams, TranslationServiceProvider,
    TranslatorError,
};
use helpers::*;

fn create_provider() -> (Arc<RecordingGlossaryClient>, TranslationServiceProvider) {
    init_test_env();
    let client = Arc::new(RecordingGlossaryClient::new());
    let shared: Arc<dyn GlossaryClient> = client.clone();
    (client, TranslationServiceProvider::new(shared))
}

#[test]
fn test_translator_missing_before_registration() {
    let app = Application::new("en_US");

    assert_matches!(app.translator(), Err(TranslatorError::ServiceNotRegistered(name)) if name == "translator");
}

#[test]
fn test_registered_translator_uses_application_locale() {
    let (client, provider) = create_provider();
    let mut app = Application::new("de_DE");

    app.register_providers(&[&provider]).unwrap();

    let translator = app.translator().unwrap();
    let text = translator
        .read()
        .unwrap()
        .translate("greeting", &TranslationParams::new(), None, None)
        .unwrap();

    assert_eq!(text, "de_DE:greeting");
    assert_eq!(client.last_call().locale.as_deref(), Some("de_DE"));
}

#[test]
fn test_translator_is_shared_instance() {
    let (client, provider) = create_provider();
    let mut app = Application::new("en_US");
    provider.register(&mut app).unwrap();

    let first = app.translator().unwrap();
    let second = app.translator().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    first
        .write()
        .unwrap()
        .set_locale("nl_NL".to_string())
        .set_locale("fr_FR".to_string());
    second
        .read()
        .unwrap()
        .translate("greeting", &TranslationParams::new(), None, None)
        .unwrap();

    assert_eq!(client.last_call().locale.as_deref(), Some("fr_FR"));
}

#[test]
fn test_reregistration_replaces_instance() {
    let (_client, provider) = create_provider();
    let mut app = Application::new("en_US");

    provider.register(&mut app).unwrap();
    let first = app.translator().unwrap();
    provider.register(&mut app).unwrap();
    let second = app.translator().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_application_without_locale() {
    let (client, provider) = create_provider();
    let mut app = Application::default();
    provider.register(&mut app).unwrap();

    let translator = app.translator().unwrap();
    let translator = translator.read().unwrap();
    assert_eq!(translator.locale(), None);

    translator
        .translate_plural("one item|%count% items", 2, &params(&[("%count%", "2")]), None, None)
        .unwrap();
    let call = client.last_call();
    assert_eq!(call.id, "%count% items");
    assert_eq!(call.locale, None);
}

#[test]
fn test_shared_translator_across_threads() {
    let (client, provider) = create_provider();
    let mut app = Application::new("en_US");
    provider.register(&mut app).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let translator = app.translator().unwrap();
            std::thread::spawn(move || {
                translator
                    .read()
                    .unwrap()
                    .translate(&format!("key.{}", i), &TranslationParams::new(), None, None)
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().starts_with("en_US:key."));
    }
    assert_eq!(client.calls().len(), 4);
}
