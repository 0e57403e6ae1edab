use crate::i18n::locales::{is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const LOCALE_STORAGE_KEY: &str = "quickview.locale";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| "en".to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        "en".to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(|| build_bundle("en").unwrap_or_else(fallback_bundle))
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language for internationalization
///
/// Changes the active bundle, updates `<html lang>` and persists the choice.
/// Unsupported codes are ignored.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported locale `{lang}`");
        return;
    };
    replace_bundle(bundle);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("lang", lang);
        }
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("es").expect("bundle should load");
        assert_eq!(bundle.lang, "es");
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
        assert!(build_bundle("xx").is_none());
    }

    #[test]
    fn fallback_bundle_defaults_to_en() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.is_object());
    }
}
