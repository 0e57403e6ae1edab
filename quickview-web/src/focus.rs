//! Focus trap for the quick-view dialog
//!
//! One window-level `keydown` listener per open lifetime handles Escape from
//! anywhere and cycles Tab within the container. The focusable set is
//! queried on every key press so it always matches what is rendered.

use quickview_core::{TabDecision, TrapSlot, TrapToken, tab_decision};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, KeyboardEvent, Window};
use yew::prelude::*;

use crate::a11y::FOCUSABLE_QUERY;
use crate::dom;

thread_local! {
    static TRAP: RefCell<TrapSlot> = const { RefCell::new(TrapSlot::new()) };
}

/// Removes its window listener and releases the trap slot on drop.
struct KeyListener {
    window: Window,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
    token: TrapToken,
}

impl KeyListener {
    fn install(handler: impl FnMut(KeyboardEvent) + 'static) -> Option<Self> {
        let window = dom::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
        window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .ok()?;
        let token = TRAP.with(|slot| slot.borrow_mut().install());
        Some(Self {
            window,
            closure,
            token,
        })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
        TRAP.with(|slot| slot.borrow_mut().uninstall(self.token));
    }
}

fn focusable_elements(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn handle_key(event: &KeyboardEvent, container_ref: &NodeRef, on_close: &Callback<()>) {
    if event.key() == "Escape" {
        event.prevent_default();
        on_close.emit(());
        return;
    }
    if event.key() != "Tab" {
        return;
    }
    let Some(container) = container_ref.cast::<Element>() else {
        return;
    };
    let focusables = focusable_elements(&container);
    let active = dom::document().and_then(|doc| doc.active_element());
    let inside = active
        .as_ref()
        .is_some_and(|el| container.contains(Some(el)));
    let active_index = active.as_ref().and_then(|active| {
        focusables
            .iter()
            .position(|el| AsRef::<Element>::as_ref(el) == active)
    });

    let target = match tab_decision(focusables.len(), active_index, inside, event.shift_key()) {
        TabDecision::Allow => return,
        TabDecision::FocusFirst => focusables.first(),
        TabDecision::FocusLast => focusables.last(),
    };
    if let Some(target) = target {
        event.prevent_default();
        let _ = target.focus();
    }
}

/// Trap focus inside `container_ref` while `open`.
///
/// The container is focused once its content has loaded, and again whenever
/// `content_key` changes after that. On close the element that had focus
/// before opening gets it back if it is still in the document.
#[hook]
pub fn use_focus_trap<K>(
    open: bool,
    loading: bool,
    content_key: K,
    container_ref: NodeRef,
    on_close: Callback<()>,
) where
    K: PartialEq + 'static,
{
    let on_close_slot = use_mut_ref(|| on_close.clone());
    *on_close_slot.borrow_mut() = on_close;

    {
        let container_ref = container_ref.clone();
        use_effect_with(open, move |open| {
            let mut listener = None;
            let mut previous = None;
            if cfg!(target_arch = "wasm32") && *open {
                previous = dom::active_html_element();
                listener = KeyListener::install(move |event: KeyboardEvent| {
                    let on_close = on_close_slot.borrow().clone();
                    handle_key(&event, &container_ref, &on_close);
                });
            }
            move || {
                drop(listener);
                if let Some(el) = previous.filter(|el| el.is_connected()) {
                    let _ = el.focus();
                }
            }
        });
    }

    use_effect_with((open, loading, content_key), move |(open, loading, _)| {
        if cfg!(target_arch = "wasm32")
            && *open
            && !*loading
            && let Some(container) = container_ref.cast::<HtmlElement>()
        {
            let _ = container.focus();
        }
        || ()
    });
}

/// Whether a trap is installed right now.
#[must_use]
pub fn trap_installed() -> bool {
    TRAP.with(|slot| slot.borrow().is_installed())
}

/// Total installations since startup.
#[must_use]
pub fn trap_installations() -> u64 {
    TRAP.with(|slot| slot.borrow().installations())
}
