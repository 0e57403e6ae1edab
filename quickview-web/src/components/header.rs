use crate::i18n::{locales, set_lang, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ t("app.skip") }</a>
            <span class="site-header__title">{ t("app.title") }</span>
            <nav aria-label={t("header.language")}>
                <label for="lang-select" class="sr-only">{ t("header.language") }</label>
                <select id="lang-select" onchange={on_change}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                    }) }
                </select>
            </nav>
        </header>
    }
}
