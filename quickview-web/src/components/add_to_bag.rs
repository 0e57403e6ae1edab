use std::collections::BTreeMap;
use yew::prelude::*;

use crate::a11y::announce;
use crate::i18n::{t, tr};

const SUCCESS_DISPLAY_MS: i32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BagState {
    Idle,
    Adding,
    Added,
}

impl BagState {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Idle => t("bag.add"),
            Self::Adding => t("bag.adding"),
            Self::Added => t("bag.added"),
        }
    }
}

/// Simulated latency: 800 to 1200 ms from a unit random sample.
#[must_use]
pub fn simulated_delay_ms(unit: f64) -> i32 {
    let unit = unit.clamp(0.0, 1.0);
    // `unit` is clamped, so the product stays within 0..=400.
    #[allow(clippy::cast_possible_truncation)]
    let jitter = (unit * 400.0).round() as i32;
    800 + jitter
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub disabled: bool,
    pub title: AttrValue,
}

/// Purely visual add-to-bag toggle; nothing is persisted.
#[function_component(AddToBagButton)]
pub fn add_to_bag_button(props: &Props) -> Html {
    let state = use_state(|| BagState::Idle);

    let onclick = {
        let state = state.clone();
        let title = props.title.clone();
        Callback::from(move |_: MouseEvent| {
            if *state != BagState::Idle || !cfg!(target_arch = "wasm32") {
                return;
            }
            state.set(BagState::Adding);
            let state = state.clone();
            let title = title.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let delay = simulated_delay_ms(crate::dom::random_unit());
                if crate::dom::sleep_ms(delay).await.is_err() {
                    state.set(BagState::Idle);
                    return;
                }
                state.set(BagState::Added);
                let mut vars = BTreeMap::new();
                vars.insert("title", title.as_str());
                announce(&tr("bag.added_status", Some(&vars)));
                let _ = crate::dom::sleep_ms(SUCCESS_DISPLAY_MS).await;
                state.set(BagState::Idle);
            });
        })
    };

    let class = match *state {
        BagState::Idle => "button button--primary add-to-bag",
        BagState::Adding => "button button--primary add-to-bag add-to-bag--adding",
        BagState::Added => "button button--primary add-to-bag add-to-bag--added",
    };

    html! {
        <button
            type="button"
            class={class}
            disabled={props.disabled || *state == BagState::Adding}
            aria-disabled={props.disabled.to_string()}
            onclick={onclick}
        >
            { state.label() }
        </button>
    }
}
