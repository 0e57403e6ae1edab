//! Data hooks: the catalog list and the last-request-wins product fetch
use quickview_core::{CatalogEntry, CatalogProvider, LoadState, RequestLedger};
use std::rc::Rc;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::providers::{HttpCatalogProvider, HttpProductProvider};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogState {
    Loading,
    Ready(Rc<Vec<CatalogEntry>>),
    Failed,
}

/// Load the entries of `collection` once per collection name.
#[hook]
pub fn use_catalog(collection: &'static str) -> CatalogState {
    let state = use_state(|| CatalogState::Loading);
    {
        let state = state.clone();
        use_effect_with(collection, move |collection| {
            #[cfg(target_arch = "wasm32")]
            {
                let collection = *collection;
                wasm_bindgen_futures::spawn_local(async move {
                    let next = load_catalog_state(&HttpCatalogProvider::default(), collection).await;
                    state.set(next);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (collection, state);
            }
            || ()
        });
    }
    (*state).clone()
}

/// Run a catalog provider and fold the result into a [`CatalogState`].
#[allow(clippy::future_not_send)]
pub async fn load_catalog_state<P>(provider: &P, collection: &str) -> CatalogState
where
    P: CatalogProvider + ?Sized,
{
    match provider.load_catalog(collection).await {
        Ok(entries) => CatalogState::Ready(Rc::new(entries)),
        Err(err) => {
            log::error!("failed to load collection `{collection}`: {err}");
            CatalogState::Failed
        }
    }
}

fn initial_state(handle: Option<&String>) -> LoadState {
    handle.map_or(LoadState::Idle, |handle| LoadState::Loading {
        handle: handle.clone(),
    })
}

/// Fetch the product for the open handle.
///
/// The effect is keyed on the handle, so re-rendering with the same open
/// item never refetches. Switching items issues a new ticket; a response
/// for a superseded ticket is dropped by the ledger. Closing clears the
/// ledger so a late response cannot reopen anything.
#[hook]
pub fn use_product(handle: Option<String>) -> LoadState {
    let wanted = handle.clone();
    let state = use_state(|| initial_state(handle.as_ref()));
    let ledger = use_mut_ref(RequestLedger::new);
    {
        let state = state.clone();
        use_effect_with(handle, move |handle| {
            match handle {
                None => {
                    ledger.borrow().clear();
                    state.set(LoadState::Idle);
                }
                Some(handle) => {
                    let ticket = ledger.borrow().begin(handle);
                    if let Some(ticket) = ticket {
                        state.set(LoadState::Loading {
                            handle: handle.clone(),
                        });
                        #[cfg(target_arch = "wasm32")]
                        wasm_bindgen_futures::spawn_local(async move {
                            let provider = HttpProductProvider::default();
                            let outcome = quickview_core::fetch_product(&provider, &ticket).await;
                            let next = ledger.borrow().settle(&ticket, outcome);
                            if let Some(next) = next {
                                state.set(next);
                            }
                        });
                        #[cfg(not(target_arch = "wasm32"))]
                        let _ = ticket;
                    }
                }
            }
            || ()
        });
    }
    (*state).clone().for_handle(wanted.as_deref())
}
