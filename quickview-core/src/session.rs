//! Selection state for one open overlay
//!
//! `VariantSession` owns the Selection and the Display Override for a single
//! product view and runs [`VariantSession::reconcile`] after every selection
//! change, so the override never outlives the variant it was picked for.

use crate::availability::{OptionRow, StepDirection, availability_matrix, step_enabled_value};
use crate::display::{DisplayState, derive_display, reconcile_override};
use crate::error::SelectionError;
use crate::model::{Image, Product, Variant};
use crate::resolver::resolve;
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSession {
    product: Product,
    selection: Selection,
    override_image: Option<Image>,
    resolved_id: Option<String>,
}

impl VariantSession {
    /// Start a session with the selection copied from the first variant.
    #[must_use]
    pub fn new(product: Product) -> Self {
        if let Err(err) = product.validate() {
            log::warn!("product `{}` violates model invariants: {err}", product.handle);
        }
        let selection = Selection::from_first_variant(&product);
        let resolved_id = resolve(&product, &selection).map(|variant| variant.id.clone());
        Self {
            product,
            selection,
            override_image: None,
            resolved_id,
        }
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn override_image(&self) -> Option<&Image> {
        self.override_image.as_ref()
    }

    #[must_use]
    pub fn resolved(&self) -> Option<&Variant> {
        self.resolved_id
            .as_deref()
            .and_then(|id| self.product.variant(id))
    }

    /// True when the resolved variant exists and is available for sale.
    #[must_use]
    pub fn can_purchase(&self) -> bool {
        self.resolved().is_some_and(|variant| variant.available_for_sale)
    }

    #[must_use]
    pub fn option_rows(&self) -> Vec<OptionRow> {
        availability_matrix(&self.product, &self.selection)
    }

    #[must_use]
    pub fn display(&self) -> DisplayState {
        derive_display(
            &self.product,
            self.resolved(),
            self.override_image.as_ref(),
        )
    }

    /// Change one dimension's value.
    ///
    /// Any accepted change clears the override, even when the new variant
    /// happens to carry the same image. Reachability is not enforced here:
    /// the view disables unreachable values and keyboard stepping skips them.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] for undeclared dimensions or values.
    pub fn select(&mut self, dimension: &str, value: &str) -> Result<bool, SelectionError> {
        let changed = self.selection.set_checked(&self.product, dimension, value)?;
        if changed {
            self.override_image = None;
            self.reconcile();
        }
        Ok(changed)
    }

    /// Move `dimension` to the next enabled value. Returns the value chosen.
    pub fn step(&mut self, dimension: &str, direction: StepDirection) -> Option<String> {
        let next = step_enabled_value(&self.product, &self.selection, dimension, direction)?
            .to_string();
        self.select(dimension, &next).ok().map(|_| next)
    }

    /// Record a thumbnail pick as the display override.
    pub fn pick_image(&mut self, image: Image) {
        self.override_image = Some(image);
    }

    /// Re-resolve the variant and drop the override if its identity changed.
    pub fn reconcile(&mut self) {
        let previous = self.resolved().cloned();
        let next = resolve(&self.product, &self.selection).cloned();
        self.override_image =
            reconcile_override(previous.as_ref(), next.as_ref(), self.override_image.take());
        self.resolved_id = next.map(|variant| variant.id);
    }
}
