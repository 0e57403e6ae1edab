#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Intl, Object, Reflect};
use quickview_core::{DisplayPrice, Money};
#[cfg(target_arch = "wasm32")]
use rust_decimal::prelude::ToPrimitive;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

fn fallback_money(money: &Money) -> String {
    let amount = money.amount.round_dp(2);
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let abs = amount.abs();
    match money.currency_code.as_str() {
        "USD" => format!("{sign}${abs:.2}"),
        "EUR" => format!("{sign}€{abs:.2}"),
        "GBP" => format!("{sign}£{abs:.2}"),
        code => format!("{sign}{abs:.2} {code}"),
    }
}

/// Format an amount in its own currency using the current locale via Intl
#[must_use]
pub fn fmt_money(money: &Money) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(amount) = money.amount.to_f64() {
            return with_bundle(|bundle| {
                let locales = {
                    let arr = js_sys::Array::new();
                    arr.push(&JsValue::from_str(&bundle.lang));
                    arr
                };
                let opts = Object::new();
                let _ = Reflect::set(
                    &opts,
                    &JsValue::from_str("style"),
                    &JsValue::from_str("currency"),
                );
                let _ = Reflect::set(
                    &opts,
                    &JsValue::from_str("currency"),
                    &JsValue::from_str(&money.currency_code),
                );
                let nf = Intl::NumberFormat::new(&locales, &opts);
                nf.format()
                    .call1(&nf, &JsValue::from_f64(amount))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_else(|| fallback_money(money))
            });
        }
        fallback_money(money)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        fallback_money(money)
    }
}

/// Format the price shown for the current configuration.
#[must_use]
pub fn fmt_price(price: &DisplayPrice) -> String {
    fmt_money(price.money())
}
