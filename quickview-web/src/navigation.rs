//! Overlay state bound to the browser history
use quickview_core::{HistoryStore, NavigationSynchronizer, OverlayState};
use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yew_router::hooks::use_location;

/// [`HistoryStore`] over the shared browser history used by the router.
///
/// Pushes keep the current path and fragment and only swap the query, so
/// there is no reload and no scroll jump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserHistoryStore;

impl HistoryStore for BrowserHistoryStore {
    fn current_query(&self) -> String {
        BrowserHistory::new().location().query_str().to_string()
    }

    fn push_query(&self, query: &str) {
        let history = BrowserHistory::new();
        let location = history.location();
        let target = format!("{}{query}{}", location.path(), location.hash());
        history.push(target);
    }
}

/// Current overlay state plus the callbacks that change it.
#[derive(Clone, PartialEq)]
pub struct QuickViewNav {
    pub state: OverlayState,
    pub open: Callback<String>,
    pub close: Callback<()>,
}

/// Read the overlay state from the router location; re-renders on every
/// push, back and forward.
#[hook]
pub fn use_quick_view() -> QuickViewNav {
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    let state = OverlayState::from_query(&query);

    let open = Callback::from(|handle: String| {
        if !cfg!(target_arch = "wasm32") {
            return;
        }
        NavigationSynchronizer::new(BrowserHistoryStore).open(&handle);
    });
    let close = Callback::from(|()| {
        if !cfg!(target_arch = "wasm32") {
            return;
        }
        NavigationSynchronizer::new(BrowserHistoryStore).close();
    });

    QuickViewNav { state, open, close }
}
