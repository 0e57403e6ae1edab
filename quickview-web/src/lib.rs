#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod focus;
pub mod i18n;
pub mod loading;
pub mod logger;
pub mod navigation;
pub mod paths;
pub mod providers;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init();
    // Ensure <html lang> matches the saved locale before first paint
    crate::i18n::set_lang(&crate::i18n::current_lang());
    log::info!("quickview starting, api base {}", paths::api_base());
    yew::Renderer::<app::App>::new().render();
}
