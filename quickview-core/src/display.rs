//! Image and price shown for the current configuration
use serde::{Deserialize, Serialize};

use crate::model::{Image, Money, Product, Variant};

/// Currency of the price shown while no variant is resolved.
pub const FALLBACK_CURRENCY: &str = "USD";

/// Where the displayed image came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayImage {
    /// Picked explicitly from the thumbnail strip.
    Override(Image),
    /// The resolved variant's own image.
    Variant(Image),
    /// The product's first declared image.
    ProductDefault(Image),
    /// Nothing to show; rendered as a placeholder.
    None,
}

impl DisplayImage {
    #[must_use]
    pub const fn image(&self) -> Option<&Image> {
        match self {
            Self::Override(image) | Self::Variant(image) | Self::ProductDefault(image) => {
                Some(image)
            }
            Self::None => None,
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.image().map(|image| image.url.as_str())
    }
}

/// Price to render.
///
/// `Unresolved` carries a zero amount in [`FALLBACK_CURRENCY`]. It is a
/// placeholder, not a price: a genuinely free variant is `Variant` with a
/// zero amount, so formatting can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayPrice {
    Variant(Money),
    Unresolved(Money),
}

impl DisplayPrice {
    #[must_use]
    pub fn unresolved() -> Self {
        Self::Unresolved(Money::zero(FALLBACK_CURRENCY))
    }

    #[must_use]
    pub const fn money(&self) -> &Money {
        match self {
            Self::Variant(money) | Self::Unresolved(money) => money,
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Variant(_))
    }
}

/// The single image/price pair rendered for a product view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub image: DisplayImage,
    pub price: DisplayPrice,
}

/// Combine the resolved variant, the manual override and the product imagery.
#[must_use]
pub fn derive_display(
    product: &Product,
    resolved: Option<&Variant>,
    override_image: Option<&Image>,
) -> DisplayState {
    let image = if let Some(picked) = override_image {
        DisplayImage::Override(picked.clone())
    } else if let Some(image) = resolved.and_then(|variant| variant.image.as_ref()) {
        DisplayImage::Variant(image.clone())
    } else if let Some(image) = product.first_image() {
        DisplayImage::ProductDefault(image.clone())
    } else {
        DisplayImage::None
    };

    let price = resolved.map_or_else(DisplayPrice::unresolved, |variant| {
        DisplayPrice::Variant(variant.price.clone())
    });

    DisplayState { image, price }
}

/// Override to keep after the resolved variant moved from `previous` to `next`.
///
/// The override survives only while the variant identity is unchanged;
/// moving into or out of "no variant" counts as a change.
#[must_use]
pub fn reconcile_override(
    previous: Option<&Variant>,
    next: Option<&Variant>,
    override_image: Option<Image>,
) -> Option<Image> {
    let same = match (previous, next) {
        (Some(a), Some(b)) => a.id == b.id,
        (None, None) => true,
        _ => false,
    };
    if same { override_image } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::tee;
    use rust_decimal::Decimal;

    #[test]
    fn image_resolution_order() {
        let mut product = tee();
        let picked = Image::new("https://cdn.test/picked.jpg");
        product.variants[0].image = Some(Image::new("https://cdn.test/red-s.jpg"));
        let red_s = &product.variants[0];
        let blue_s = &product.variants[2];

        let shown = derive_display(&product, Some(red_s), Some(&picked));
        assert_eq!(shown.image, DisplayImage::Override(picked.clone()));

        let shown = derive_display(&product, Some(red_s), None);
        assert_eq!(shown.image.url(), Some("https://cdn.test/red-s.jpg"));

        let shown = derive_display(&product, Some(blue_s), None);
        assert!(matches!(shown.image, DisplayImage::ProductDefault(_)));

        product.images.clear();
        let shown = derive_display(&product, None, None);
        assert_eq!(shown.image, DisplayImage::None);
    }

    #[test]
    fn unresolved_price_is_tagged_fallback() {
        let product = tee();
        let shown = derive_display(&product, None, None);
        assert!(!shown.price.is_resolved());
        assert_eq!(shown.price.money(), &Money::zero("USD"));

        let mut free = product.variants[0].clone();
        free.price = Money::new(Decimal::ZERO, "USD");
        let shown = derive_display(&product, Some(&free), None);
        assert!(shown.price.is_resolved());
        assert_ne!(shown.price, DisplayPrice::unresolved());
    }

    #[test]
    fn override_cleared_on_identity_change_only() {
        let product = tee();
        let picked = Some(Image::new("https://cdn.test/picked.jpg"));
        let red_s = product.variant("red-s");
        let blue_s = product.variant("blue-s");

        assert_eq!(reconcile_override(red_s, red_s, picked.clone()), picked);
        assert_eq!(reconcile_override(red_s, blue_s, picked.clone()), None);
        assert_eq!(reconcile_override(red_s, None, picked.clone()), None);
        assert_eq!(reconcile_override(None, blue_s, picked.clone()), None);
        assert_eq!(reconcile_override(None, None, picked.clone()), picked);
    }
}
