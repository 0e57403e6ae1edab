//! Quickview Engine
//!
//! Platform-agnostic logic behind the storefront quick-view overlay: variant
//! resolution, per-value availability, image/price derivation, URL-driven
//! overlay state and the focus-trap rules. No browser dependencies.

pub mod availability;
pub mod catalog;
pub mod display;
pub mod error;
pub mod focus;
pub mod loader;
pub mod model;
pub mod navigation;
pub mod providers;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod wire;

// Re-export commonly used types
pub use availability::{
    OptionRow, OptionValueState, StepDirection, availability_matrix, is_value_reachable,
    step_enabled_value,
};
pub use catalog::CatalogEntry;
pub use display::{
    DisplayImage, DisplayPrice, DisplayState, FALLBACK_CURRENCY, derive_display,
    reconcile_override,
};
pub use error::{ModelError, ProductError, SelectionError};
pub use focus::{TabDecision, TrapSlot, TrapToken, tab_decision};
pub use loader::{LoadOutcome, LoadState, RequestLedger, RequestTicket, fetch_product};
pub use model::{
    Image, Money, OptionDimension, Product, SENTINEL_OPTION_NAME, SENTINEL_OPTION_VALUE,
    SelectedOption, Variant,
};
pub use navigation::{
    HistoryStore, MemoryHistory, NavigationSynchronizer, OverlayState, OverlayTransition,
    QUERY_PARAM, QueryString, is_valid_handle,
};
pub use providers::{StaticCatalogProvider, StaticProductProvider};
pub use resolver::resolve;
pub use selection::Selection;
pub use session::VariantSession;
pub use wire::{decode_catalog, decode_product};

use async_trait::async_trait;

/// Source of full product records, keyed by handle.
/// Platform-specific implementations should provide this
#[async_trait(?Send)]
pub trait ProductProvider {
    /// Fetch one product. `Ok(None)` means the handle does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be fetched or decoded.
    async fn load_product(&self, handle: &str) -> Result<Option<Product>, ProductError>;
}

/// Source of the catalog grid entries for a collection.
#[async_trait(?Send)]
pub trait CatalogProvider {
    /// Fetch the entries listed in `collection`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be fetched or decoded.
    async fn load_catalog(&self, collection: &str) -> Result<Vec<CatalogEntry>, ProductError>;
}
