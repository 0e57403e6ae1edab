use quickview_core::{Image, VariantSession};
use yew::prelude::*;

use super::{Gallery, OptionGroup, OptionIntent};
use crate::components::add_to_bag::AddToBagButton;
use crate::i18n::{fmt_price, t};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: VariantSession,
    pub on_option: Callback<OptionIntent>,
    pub on_pick: Callback<Image>,
}

fn description(session: &VariantSession) -> Html {
    let product = session.product();
    if !product.description_html.trim().is_empty() {
        Html::from_html_unchecked(AttrValue::from(product.description_html.clone()))
    } else if !product.description.trim().is_empty() {
        html! { <p>{ product.description.clone() }</p> }
    } else {
        Html::default()
    }
}

#[function_component(DetailsView)]
pub fn details_view(props: &Props) -> Html {
    let session = &props.session;
    let product = session.product();
    let display = session.display();
    let can_purchase = session.can_purchase();
    let price_class = if display.price.is_resolved() {
        "product-details__price"
    } else {
        "product-details__price product-details__price--unresolved"
    };

    html! {
        <div class="product-details">
            <Gallery
                display={display.image.clone()}
                images={product.images.clone()}
                title={AttrValue::from(product.title.clone())}
                on_pick={props.on_pick.clone()}
            />
            <div class="product-details__info">
                <h2 id="quickview-title" class="product-details__title">{ product.title.clone() }</h2>
                <p class={price_class} aria-label={t("details.price")}>{ fmt_price(&display.price) }</p>
                { for session.option_rows().into_iter().map(|row| html! {
                    <OptionGroup key={row.name.clone()} row={row} on_intent={props.on_option.clone()} />
                }) }
                <div class="product-details__description" aria-label={t("details.description")}>
                    { description(session) }
                </div>
                <div class="product-details__purchase">
                    <AddToBagButton
                        disabled={!can_purchase}
                        title={AttrValue::from(product.title.clone())}
                    />
                    if !can_purchase {
                        <p class="product-details__unavailable" role="note">
                            { t("details.unavailable") }
                        </p>
                    }
                </div>
            </div>
        </div>
    }
}
