use quickview_core::CatalogEntry;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::product_card::ProductCard;
use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entries: Rc<Vec<CatalogEntry>>,
    pub on_open: Callback<String>,
}

#[function_component(ProductListing)]
pub fn product_listing(props: &Props) -> Html {
    if props.entries.is_empty() {
        return html! { <p class="catalog__empty">{ t("catalog.empty") }</p> };
    }
    html! {
        <div class="product-grid">
            { for props.entries.iter().map(|entry| html! {
                <ProductCard key={entry.id.clone()} entry={entry.clone()} on_open={props.on_open.clone()} />
            }) }
        </div>
    }
}
