use quickview_core::CatalogEntry;
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::i18n::{fmt_money, t, tr};
use crate::providers::prefetch_product;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entry: CatalogEntry,
    pub on_open: Callback<String>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &Props) -> Html {
    let entry = &props.entry;
    let open = {
        let cb = props.on_open.clone();
        let handle = entry.handle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(handle.clone()))
    };
    let prefetch = {
        let handle = entry.handle.clone();
        Callback::from(move |_: MouseEvent| prefetch_product(&handle))
    };
    let label = {
        let mut vars = BTreeMap::new();
        vars.insert("title", entry.title.as_str());
        tr("catalog.quick_view_label", Some(&vars))
    };

    let image = entry.image.as_ref().map_or_else(
        || html! { <div class="product-card__placeholder">{ t("catalog.no_image") }</div> },
        |image| {
            html! {
                <img
                    class="product-card__image"
                    src={image.url.clone()}
                    alt={image.alt_or(&entry.title).to_string()}
                    loading="lazy"
                />
            }
        },
    );

    html! {
        <article class="product-card" onmouseenter={prefetch}>
            { image }
            <h2 class="product-card__title">{ entry.title.clone() }</h2>
            <p class="product-card__price">{ fmt_money(&entry.price) }</p>
            <button
                type="button"
                class="product-card__quick-view"
                aria-haspopup="dialog"
                aria-label={label}
                onclick={open}
            >
                { t("catalog.quick_view") }
            </button>
        </article>
    }
}
