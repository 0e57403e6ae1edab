use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{name}` placeholders filled from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
