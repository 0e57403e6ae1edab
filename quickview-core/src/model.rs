//! Product, option dimension and variant model
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ModelError;

/// Name of the placeholder dimension a storefront attaches to single-variant products.
pub const SENTINEL_OPTION_NAME: &str = "Title";
/// Sole value carried by the placeholder dimension.
pub const SENTINEL_OPTION_VALUE: &str = "Default Title";

/// A displayable image reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Image {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt_text = Some(alt.into());
        self
    }

    /// Alt text, falling back to `fallback` when missing or blank.
    #[must_use]
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt_text
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or(fallback)
    }
}

/// A decimal amount with its ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency_code: String,
}

impl Money {
    #[must_use]
    pub fn new(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }
}

/// A named axis of configuration with its candidate values in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDimension {
    pub name: String,
    pub values: Vec<String>,
}

impl OptionDimension {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// False for the "no real choice" placeholder dimension.
    #[must_use]
    pub fn is_offered(&self) -> bool {
        !(self.name == SENTINEL_OPTION_NAME
            && self.values.len() == 1
            && self.values[0] == SENTINEL_OPTION_VALUE)
    }

    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// One dimension/value pair of a variant's selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

impl SelectedOption {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A concrete purchasable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub available_for_sale: bool,
    pub selected_options: Vec<SelectedOption>,
    pub price: Money,
    #[serde(default)]
    pub image: Option<Image>,
}

impl Variant {
    /// Value this variant holds for `dimension`, if it names it.
    #[must_use]
    pub fn value_for(&self, dimension: &str) -> Option<&str> {
        self.selected_options
            .iter()
            .find(|opt| opt.name == dimension)
            .map(|opt| opt.value.as_str())
    }
}

/// A catalog item with its option dimensions, variants and imagery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_html: String,
    pub options: Vec<OptionDimension>,
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Product {
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&OptionDimension> {
        self.options.iter().find(|opt| opt.name == name)
    }

    /// Dimensions presented to the user, in declaration order.
    pub fn offered_options(&self) -> impl Iterator<Item = &OptionDimension> {
        self.options.iter().filter(|opt| opt.is_offered())
    }

    #[must_use]
    pub fn first_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    #[must_use]
    pub fn first_image(&self) -> Option<&Image> {
        self.images.first()
    }

    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.id == id)
    }

    /// Check the model invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: duplicate dimension names, a
    /// variant whose selection is not a total assignment over the declared
    /// dimensions, or two variants sharing one selection.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut names = BTreeSet::new();
        for option in &self.options {
            if !names.insert(option.name.as_str()) {
                return Err(ModelError::DuplicateDimension(option.name.clone()));
            }
        }

        let mut seen = BTreeSet::new();
        for variant in &self.variants {
            if variant.selected_options.len() != self.options.len() {
                return Err(ModelError::IncompleteVariant {
                    variant: variant.id.clone(),
                    expected: self.options.len(),
                    found: variant.selected_options.len(),
                });
            }
            for selected in &variant.selected_options {
                let Some(dimension) = self.option(&selected.name) else {
                    return Err(ModelError::UnknownDimension {
                        variant: variant.id.clone(),
                        dimension: selected.name.clone(),
                    });
                };
                if !dimension.has_value(&selected.value) {
                    return Err(ModelError::UnknownValue {
                        variant: variant.id.clone(),
                        dimension: selected.name.clone(),
                        value: selected.value.clone(),
                    });
                }
            }
            let mut key: Vec<(&str, &str)> = variant
                .selected_options
                .iter()
                .map(|opt| (opt.name.as_str(), opt.value.as_str()))
                .collect();
            key.sort_unstable();
            if key.windows(2).any(|pair| pair[0].0 == pair[1].0) {
                return Err(ModelError::IncompleteVariant {
                    variant: variant.id.clone(),
                    expected: self.options.len(),
                    found: variant.selected_options.len(),
                });
            }
            if !seen.insert(key) {
                return Err(ModelError::DuplicateSelection(variant.id.clone()));
            }
        }
        Ok(())
    }
}
