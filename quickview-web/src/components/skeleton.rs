use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct GridProps {
    #[prop_or(8)]
    pub count: usize,
}

/// Placeholder grid shown while the catalog loads.
#[function_component(ProductGridSkeleton)]
pub fn product_grid_skeleton(props: &GridProps) -> Html {
    html! {
        <div class="product-grid product-grid--loading" aria-busy="true" aria-label={t("catalog.loading")}>
            { for (0..props.count).map(|idx| html! {
                <div key={idx} class="product-card product-card--skeleton" aria-hidden="true">
                    <div class="skeleton skeleton--image"></div>
                    <div class="skeleton skeleton--line"></div>
                    <div class="skeleton skeleton--line skeleton--short"></div>
                </div>
            }) }
        </div>
    }
}

/// Placeholder for the quick-view body while the product loads.
#[function_component(ProductSkeleton)]
pub fn product_skeleton() -> Html {
    html! {
        <div class="product-details product-details--loading" aria-busy="true">
            <h2 id="quickview-title" class="sr-only">{ t("overlay.loading") }</h2>
            <div class="skeleton skeleton--image" aria-hidden="true"></div>
            <div class="product-details__info" aria-hidden="true">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--line skeleton--short"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--button"></div>
            </div>
        </div>
    }
}
