//! Last-request-wins bookkeeping for the product fetch
//!
//! Each fetch is tagged with a [`RequestTicket`] when it is issued. A result
//! is applied only if its ticket is still the current one when it arrives;
//! anything else belongs to an item the user already navigated away from
//! and is dropped. The in-flight request itself is never cancelled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::ProductProvider;
use crate::error::ProductError;
use crate::model::Product;

/// Identity of one issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    handle: String,
}

impl RequestTicket {
    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}

/// What the overlay body renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        handle: String,
    },
    Ready {
        handle: String,
        product: Rc<Product>,
    },
    /// Not found and fetch failures share one presentation.
    Unavailable {
        handle: String,
    },
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Ready { product, .. } => Some(product.as_ref()),
            _ => None,
        }
    }

    /// Handle this state was produced for.
    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { handle } | Self::Ready { handle, .. } | Self::Unavailable { handle } => {
                Some(handle.as_str())
            }
        }
    }

    /// The state to render while `wanted` is the open handle.
    ///
    /// Anything produced for a different handle is shown as loading, so a
    /// previous item is never rendered under the current URL.
    #[must_use]
    pub fn for_handle(self, wanted: Option<&str>) -> Self {
        match wanted {
            None => Self::Idle,
            Some(wanted) if self.handle() == Some(wanted) => self,
            Some(wanted) => Self::Loading {
                handle: wanted.to_string(),
            },
        }
    }
}

/// Result of one fetch once errors have been folded into "unavailable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Product),
    Unavailable,
}

/// Tracks the single current request.
#[derive(Debug, Default)]
pub struct RequestLedger {
    next_seq: Cell<u64>,
    current: RefCell<Option<RequestTicket>>,
    issued: Cell<u64>,
}

impl RequestLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for `handle`.
    ///
    /// Returns `None` when `handle` is already the current request, so
    /// re-entering the same open item never refetches.
    pub fn begin(&self, handle: &str) -> Option<RequestTicket> {
        if self
            .current
            .borrow()
            .as_ref()
            .is_some_and(|ticket| ticket.handle == handle)
        {
            return None;
        }
        let seq = self.next_seq.get() + 1;
        self.next_seq.set(seq);
        self.issued.set(self.issued.get() + 1);
        let ticket = RequestTicket {
            seq,
            handle: handle.to_string(),
        };
        *self.current.borrow_mut() = Some(ticket.clone());
        Some(ticket)
    }

    /// Forget the current request; its result will be discarded.
    pub fn clear(&self) {
        self.current.borrow_mut().take();
    }

    /// Handle of the current request, if any.
    #[must_use]
    pub fn current_handle(&self) -> Option<String> {
        self.current
            .borrow()
            .as_ref()
            .map(|ticket| ticket.handle.clone())
    }

    /// Number of tickets issued over the ledger's lifetime.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued.get()
    }

    #[must_use]
    pub fn accepts(&self, ticket: &RequestTicket) -> bool {
        self.current.borrow().as_ref() == Some(ticket)
    }

    /// Turn a finished fetch into the next [`LoadState`], or `None` if stale.
    #[must_use]
    pub fn settle(&self, ticket: &RequestTicket, outcome: LoadOutcome) -> Option<LoadState> {
        if !self.accepts(ticket) {
            log::debug!(
                "discarding stale response for `{}` (request #{})",
                ticket.handle,
                ticket.seq
            );
            return None;
        }
        Some(match outcome {
            LoadOutcome::Loaded(product) => LoadState::Ready {
                handle: ticket.handle.clone(),
                product: Rc::new(product),
            },
            LoadOutcome::Unavailable => LoadState::Unavailable {
                handle: ticket.handle.clone(),
            },
        })
    }
}

/// Run the provider for `ticket`, folding every failure into
/// [`LoadOutcome::Unavailable`] after logging it.
pub async fn fetch_product<P>(provider: &P, ticket: &RequestTicket) -> LoadOutcome
where
    P: ProductProvider + ?Sized,
{
    match provider.load_product(&ticket.handle).await {
        Ok(Some(product)) => LoadOutcome::Loaded(product),
        Ok(None) | Err(ProductError::NotFound(_)) => {
            log::warn!("product `{}` not found", ticket.handle);
            LoadOutcome::Unavailable
        }
        Err(err) => {
            log::error!("failed to fetch product `{}`: {err}", ticket.handle);
            LoadOutcome::Unavailable
        }
    }
}
