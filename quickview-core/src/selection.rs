//! Transient per-overlay choice across option dimensions
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SelectionError;
use crate::model::{Product, Variant};

/// Mapping from option dimension name to the chosen value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    choices: BTreeMap<String, String>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete selection copied from the product's first variant, or an
    /// empty one when the product has no variants.
    #[must_use]
    pub fn from_first_variant(product: &Product) -> Self {
        product
            .first_variant()
            .map(Self::from_variant)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn from_variant(variant: &Variant) -> Self {
        Self {
            choices: variant
                .selected_options
                .iter()
                .map(|opt| (opt.name.clone(), opt.value.clone()))
                .collect(),
        }
    }

    /// Build from literal pairs; handy for tests and scenario scripts.
    #[must_use]
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            choices: pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.choices.get(dimension).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// True when every declared dimension of `product` has a value.
    #[must_use]
    pub fn is_complete_for(&self, product: &Product) -> bool {
        product
            .options
            .iter()
            .all(|opt| self.choices.contains_key(&opt.name))
    }

    /// Replace exactly one entry, unchecked. Returns whether the value changed.
    pub fn set(&mut self, dimension: impl Into<String>, value: impl Into<String>) -> bool {
        let value = value.into();
        let previous = self.choices.insert(dimension.into(), value.clone());
        previous.as_deref() != Some(value.as_str())
    }

    /// Replace one entry after checking that `product` declares it.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when the dimension or value is not declared;
    /// the selection is left untouched in that case.
    pub fn set_checked(
        &mut self,
        product: &Product,
        dimension: &str,
        value: &str,
    ) -> Result<bool, SelectionError> {
        let option = product
            .option(dimension)
            .ok_or_else(|| SelectionError::UnknownDimension(dimension.to_string()))?;
        if !option.has_value(value) {
            return Err(SelectionError::UnknownValue {
                dimension: dimension.to_string(),
                value: value.to_string(),
            });
        }
        Ok(self.set(dimension, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::tee;

    #[test]
    fn initial_selection_copies_first_variant() {
        let selection = Selection::from_first_variant(&tee());
        assert_eq!(selection.get("Color"), Some("Red"));
        assert_eq!(selection.get("Size"), Some("S"));
        assert!(selection.is_complete_for(&tee()));
    }

    #[test]
    fn empty_product_yields_empty_selection() {
        let mut product = tee();
        product.variants.clear();
        assert!(Selection::from_first_variant(&product).is_empty());
    }

    #[test]
    fn set_checked_rejects_undeclared_entries() {
        let product = tee();
        let mut selection = Selection::from_first_variant(&product);
        assert_eq!(
            selection.set_checked(&product, "Material", "Cotton"),
            Err(SelectionError::UnknownDimension("Material".into()))
        );
        assert!(selection.set_checked(&product, "Size", "XL").is_err());
        assert_eq!(selection.get("Size"), Some("S"));
        assert_eq!(selection.set_checked(&product, "Size", "M"), Ok(true));
        assert_eq!(selection.set_checked(&product, "Size", "M"), Ok(false));
    }
}
