use quickview_core::{OptionRow, StepDirection};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::OptionIntent;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub row: OptionRow,
    pub on_intent: Callback<OptionIntent>,
}

fn label_id(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("option-{slug}")
}

/// Move focus onto the group's Tab stop when focus already sits in the group.
fn follow_tab_stop(group: &Element) {
    let focused_inside = crate::dom::document()
        .and_then(|doc| doc.active_element())
        .is_some_and(|el| group.contains(Some(&el)));
    if !focused_inside {
        return;
    }
    if let Ok(Some(stop)) = group.query_selector("[role='radio'][tabindex='0']")
        && let Ok(stop) = stop.dyn_into::<HtmlElement>()
    {
        let _ = stop.focus();
    }
}

/// One offered dimension rendered as a radio group.
#[function_component(OptionGroup)]
pub fn option_group(props: &Props) -> Html {
    let row = &props.row;
    let label_id = label_id(&row.name);
    let group_ref = use_node_ref();
    let tab_stop = row.tab_stop().map(|state| state.value.clone());

    {
        let group_ref = group_ref.clone();
        use_effect_with(tab_stop.clone(), move |_| {
            if cfg!(target_arch = "wasm32")
                && let Some(group) = group_ref.cast::<Element>()
            {
                follow_tab_stop(&group);
            }
        });
    }

    let onkeydown = {
        let on_intent = props.on_intent.clone();
        let dimension = row.name.clone();
        Callback::from(move |e: KeyboardEvent| {
            let Some(direction) = StepDirection::from_key(&e.key()) else {
                return;
            };
            e.prevent_default();
            on_intent.emit(OptionIntent::Step {
                dimension: dimension.clone(),
                direction,
            });
        })
    };

    html! {
        <div class="option-group">
            <span id={label_id.clone()} class="option-group__label">{ row.name.clone() }</span>
            <div ref={group_ref} role="radiogroup" aria-labelledby={label_id} class="option-group__values" onkeydown={onkeydown}>
                { for row.values.iter().map(|state| {
                    let onclick = {
                        let on_intent = props.on_intent.clone();
                        let dimension = row.name.clone();
                        let value = state.value.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_intent.emit(OptionIntent::Select {
                                dimension: dimension.clone(),
                                value: value.clone(),
                            });
                        })
                    };
                    let class = classes!(
                        "option-value",
                        state.active.then_some("option-value--active"),
                        (!state.enabled).then_some("option-value--disabled"),
                    );
                    html! {
                        <button
                            key={state.value.clone()}
                            type="button"
                            role="radio"
                            class={class}
                            aria-checked={state.active.to_string()}
                            disabled={!state.enabled}
                            tabindex={if tab_stop.as_deref() == Some(state.value.as_str()) { "0" } else { "-1" }}
                            data-value={state.value.clone()}
                            onclick={onclick}
                        >
                            { state.value.clone() }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
