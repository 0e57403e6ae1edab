use quickview_core::LoadState;
use std::collections::BTreeMap;
use yew::prelude::*;

use crate::a11y::announce;
use crate::components::product_details::ProductDetails;
use crate::components::skeleton::ProductSkeleton;
use crate::dom;
use crate::focus::use_focus_trap;
use crate::i18n::{t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub load: LoadState,
    pub on_close: Callback<()>,
}

/// Locks page scrolling for as long as the overlay is mounted.
#[hook]
fn use_scroll_lock() {
    use_effect_with((), |()| {
        let previous = if cfg!(target_arch = "wasm32") {
            dom::lock_body_scroll()
        } else {
            None
        };
        move || {
            if let Some(previous) = previous {
                dom::restore_body_scroll(&previous);
            }
            announce(&t("overlay.closed"));
        }
    });
}

/// Modal dialog around the product view.
#[function_component(QuickView)]
pub fn quick_view(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let loading = matches!(props.load, LoadState::Idle | LoadState::Loading { .. });
    use_focus_trap(
        true,
        loading,
        props.load.handle().map(str::to_string),
        container_ref.clone(),
        props.on_close.clone(),
    );
    use_scroll_lock();

    {
        let title = props.load.product().map(|product| product.title.clone());
        let missing = matches!(props.load, LoadState::Unavailable { .. });
        use_effect_with((title, missing), |(title, missing)| {
            if let Some(title) = title {
                let mut vars = BTreeMap::new();
                vars.insert("title", title.as_str());
                announce(&tr("overlay.opened", Some(&vars)));
            } else if *missing {
                announce(&t("overlay.not_found"));
            }
            || ()
        });
    }

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = match &props.load {
        LoadState::Idle | LoadState::Loading { .. } => html! { <ProductSkeleton /> },
        LoadState::Ready { handle, product } => html! {
            <ProductDetails key={handle.clone()} product={product.clone()} />
        },
        LoadState::Unavailable { .. } => html! {
            <div class="quickview__missing">
                <h2 id="quickview-title">{ t("overlay.not_found") }</h2>
                <button type="button" class="button" onclick={close.clone()}>
                    { t("overlay.return") }
                </button>
            </div>
        },
    };

    html! {
        <div class="quickview-backdrop" role="presentation" onclick={close.clone()}>
            <div
                class="quickview"
                role="dialog"
                aria-modal="true"
                aria-labelledby="quickview-title"
                aria-busy={loading.to_string()}
                tabindex="-1"
                ref={container_ref}
                onclick={keep_open}
            >
                <button
                    type="button"
                    class="quickview__close"
                    aria-label={t("overlay.close")}
                    onclick={close}
                >
                    { "×" }
                </button>
                { body }
            </div>
        </div>
    }
}
