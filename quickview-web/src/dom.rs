use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Response, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if there is no `window` or the timer cannot be scheduled.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Perform a GET request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the result is not a `Response`.
#[allow(clippy::future_not_send)]
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body stream cannot be read.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Currently focused element, if it is an `HtmlElement`.
#[must_use]
pub fn active_html_element() -> Option<HtmlElement> {
    document()
        .and_then(|doc| doc.active_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Set `overflow: hidden` on `<body>` and return the previous inline value.
#[must_use]
pub fn lock_body_scroll() -> Option<String> {
    let body = document().and_then(|doc| doc.body())?;
    let style = body.style();
    let previous = style.get_property_value("overflow").unwrap_or_default();
    let _ = style.set_property("overflow", "hidden");
    Some(previous)
}

/// Undo [`lock_body_scroll`].
pub fn restore_body_scroll(previous: &str) {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        let style = body.style();
        let _ = if previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", previous)
        };
    }
}

/// Uniform random number in `[0, 1)` from the JS engine.
#[must_use]
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}
