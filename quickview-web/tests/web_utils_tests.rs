#[cfg(target_arch = "wasm32")]
use quickview_web::dom;
use quickview_core::{DisplayPrice, Money, ProductProvider, decode_catalog};
use quickview_web::i18n;
use quickview_web::paths;
use quickview_web::providers::HttpProductProvider;
use quickview_web::router::Route;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use yew_router::Routable;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn i18n_switches_and_interpolates() {
    i18n::set_lang("es");
    assert_eq!(i18n::current_lang(), "es");
    let spanish = i18n::t("bag.add");
    i18n::set_lang("en");
    assert_eq!(i18n::t("bag.add"), "Add to bag");
    assert_ne!(spanish, "Add to bag");

    let mut vars = BTreeMap::new();
    vars.insert("title", "Canvas Tote");
    assert_eq!(
        i18n::tr("overlay.opened", Some(&vars)),
        "Quick view opened: Canvas Tote"
    );
    assert_eq!(i18n::t("missing.key"), "missing.key");
}

#[test]
fn unsupported_locale_keeps_current_language() {
    i18n::set_lang("en");
    i18n::set_lang("xx");
    assert_eq!(i18n::current_lang(), "en");
    assert!(i18n::locales().iter().any(|meta| meta.code == "es"));
}

#[test]
fn money_uses_two_decimals() {
    i18n::set_lang("en");
    let money = Money::new(Decimal::new(48, 0), "USD");
    assert_eq!(i18n::fmt_money(&money), "$48.00");
    assert_eq!(i18n::fmt_price(&DisplayPrice::unresolved()), "$0.00");
}

#[test]
fn endpoint_urls_follow_api_base() {
    assert_eq!(
        paths::product_url("https://shop.test/api/", "classic-tee"),
        "https://shop.test/api/products/classic-tee.json"
    );
    assert_eq!(
        paths::catalog_url("/static/api", "accessories"),
        "/static/api/collections/accessories.json"
    );
    assert_eq!(
        HttpProductProvider::new("/api").url_for("wool-cap"),
        "/api/products/wool-cap.json"
    );
    assert!(paths::api_base().ends_with("/static/api") || option_env!("QUICKVIEW_API_BASE").is_some());
}

#[test]
fn bundled_catalog_lists_every_bundled_product() {
    let entries = decode_catalog(include_str!("../static/api/collections/accessories.json"))
        .expect("bundled catalog decodes");
    let handles: Vec<_> = entries.iter().map(|entry| entry.handle.as_str()).collect();
    assert_eq!(handles, ["canvas-tote", "wool-cap", "classic-tee"]);

    let products = quickview_core::StaticProductProvider::new(
        [
            include_str!("../static/api/products/canvas-tote.json"),
            include_str!("../static/api/products/wool-cap.json"),
            include_str!("../static/api/products/classic-tee.json"),
        ]
        .into_iter()
        .filter_map(|body| quickview_core::decode_product(body).ok().flatten()),
    );
    for handle in handles {
        let product = futures::executor::block_on(products.load_product(handle))
            .expect("static provider never fails")
            .expect("bundled product exists");
        assert!(product.validate().is_ok(), "{handle} is well formed");
    }
}

#[test]
fn routes_map_known_paths() {
    assert_eq!(Route::recognize("/"), Some(Route::Home));
    assert_eq!(Route::Home.to_path(), "/");
    assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
}
