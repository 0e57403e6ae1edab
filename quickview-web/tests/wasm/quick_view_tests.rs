#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::prelude::*;

use quickview_core::LoadState;
use quickview_web::components::quick_view::{Props, QuickView};
use quickview_web::dom;
use quickview_web::focus::{trap_installations, trap_installed};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

fn render_with(load: LoadState, on_close: Callback<()>) -> yew::AppHandle<QuickView> {
    quickview_web::i18n::set_lang("en");
    let props = Props { load, on_close };
    yew::Renderer::<QuickView>::with_root_and_props(ensure_root(), props).render()
}

fn render_missing(on_close: Callback<()>) -> yew::AppHandle<QuickView> {
    render_with(
        LoadState::Unavailable {
            handle: "ghost".into(),
        },
        on_close,
    )
}

fn focused_opener() -> HtmlElement {
    let doc = dom::document().expect("document");
    let opener: HtmlElement = doc
        .create_element("button")
        .expect("create opener")
        .dyn_into()
        .expect("html element");
    doc.body()
        .expect("body")
        .append_child(&opener)
        .expect("append opener");
    opener.focus().expect("focus opener");
    opener
}

fn press(key: &str, shift: bool) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    dom::window()
        .expect("window")
        .dispatch_event(&event)
        .expect("dispatch keydown");
}

fn button(selector: &str) -> HtmlElement {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("query")
        .expect("element exists")
        .dyn_into()
        .expect("html element")
}

fn active() -> Option<web_sys::Element> {
    dom::document().and_then(|doc| doc.active_element())
}

#[wasm_bindgen_test]
fn opening_focuses_dialog_and_installs_one_trap() {
    let before = trap_installations();
    let handle = render_missing(Callback::noop());
    assert!(trap_installed());
    assert_eq!(trap_installations(), before + 1);
    assert_eq!(
        active().and_then(|el| el.get_attribute("role")),
        Some("dialog".to_string())
    );
    handle.destroy();
    assert!(!trap_installed());
}

#[wasm_bindgen_test]
fn tab_wraps_in_both_directions() {
    let handle = render_missing(Callback::noop());
    let close = button(".quickview__close");
    let back = button(".quickview__missing button");

    back.focus().expect("focus last");
    press("Tab", false);
    assert_eq!(active(), Some(close.clone().into()));

    press("Tab", true);
    assert_eq!(active(), Some(back.into()));
    handle.destroy();
}

#[wasm_bindgen_test]
fn escape_requests_close() {
    let closed = Rc::new(Cell::new(false));
    let on_close = {
        let closed = closed.clone();
        Callback::from(move |()| closed.set(true))
    };
    let handle = render_missing(on_close);
    press("Escape", false);
    assert!(closed.get());
    handle.destroy();
}

#[wasm_bindgen_test]
fn closing_restores_previous_focus() {
    let opener = focused_opener();
    let handle = render_missing(Callback::noop());
    handle.destroy();
    assert_eq!(active(), Some(opener.clone().into()));
    opener.remove();
}

#[wasm_bindgen_test]
fn detached_opener_is_left_alone_on_close() {
    let opener = focused_opener();
    let handle = render_missing(Callback::noop());
    opener.remove();
    handle.destroy();
    assert!(!trap_installed());
    assert!(!opener.is_connected());
    assert_ne!(active(), Some(opener.into()));
}

#[wasm_bindgen_test]
fn skeleton_does_not_take_focus() {
    let opener = focused_opener();
    let handle = render_with(
        LoadState::Loading {
            handle: "classic-tee".into(),
        },
        Callback::noop(),
    );
    assert!(trap_installed());
    assert_eq!(active(), Some(opener.clone().into()));
    handle.destroy();
    opener.remove();
}
