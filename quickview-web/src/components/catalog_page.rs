use yew::prelude::*;

use crate::components::product_listing::ProductListing;
use crate::components::quick_view::QuickView;
use crate::components::skeleton::ProductGridSkeleton;
use crate::i18n::t;
use crate::loading::{CatalogState, use_catalog, use_product};
use crate::navigation::use_quick_view;
use crate::paths;

/// Home route: the collection grid plus the URL-driven quick view.
#[function_component(CatalogPage)]
pub fn catalog_page() -> Html {
    let nav = use_quick_view();
    let catalog = use_catalog(paths::collection());
    let load = use_product(nav.state.handle().map(str::to_string));

    let grid = match catalog {
        CatalogState::Loading => html! { <ProductGridSkeleton /> },
        CatalogState::Failed => html! { <p class="catalog__error" role="alert">{ t("catalog.error") }</p> },
        CatalogState::Ready(entries) => {
            html! { <ProductListing entries={entries} on_open={nav.open.clone()} /> }
        }
    };

    html! {
        <>
            <main id="main" class="catalog">
                <h1 class="catalog__title">{ t("catalog.title") }</h1>
                { grid }
            </main>
            if nav.state.is_open() {
                <QuickView load={load} on_close={nav.close.clone()} />
            }
        </>
    }
}
