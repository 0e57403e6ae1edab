//! Selection to variant resolution
use crate::model::{Product, Variant};
use crate::selection::Selection;

/// Find the variant whose every selected option equals the selection's entry.
///
/// Variants are scanned in declaration order and the first match wins, which
/// is also the tie-break when upstream data violates selection uniqueness.
/// `None` covers both incomplete selections and combinations no variant
/// carries; callers treat it as "not for sale", never as an error.
#[must_use]
pub fn resolve<'p>(product: &'p Product, selection: &Selection) -> Option<&'p Variant> {
    product.variants.iter().find(|variant| {
        variant
            .selected_options
            .iter()
            .all(|opt| selection.get(&opt.name) == Some(opt.value.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{tee, variant};

    #[test]
    fn resolves_complete_matching_selection() {
        let product = tee();
        let selection = Selection::from_pairs([("Color", "Blue"), ("Size", "S")]);
        assert_eq!(resolve(&product, &selection).map(|v| v.id.as_str()), Some("blue-s"));
    }

    #[test]
    fn unavailable_variant_is_still_resolved() {
        let product = tee();
        let selection = Selection::from_pairs([("Color", "Red"), ("Size", "M")]);
        let resolved = resolve(&product, &selection).expect("red-m exists");
        assert!(!resolved.available_for_sale);
    }

    #[test]
    fn partial_or_unknown_selection_resolves_to_none() {
        let product = tee();
        assert!(resolve(&product, &Selection::from_pairs([("Color", "Red")])).is_none());
        assert!(resolve(&product, &Selection::new()).is_none());
        let missing = Selection::from_pairs([("Color", "Blue"), ("Size", "M")]);
        assert!(resolve(&product, &missing).is_none());
    }

    #[test]
    fn first_declared_variant_wins_on_duplicates() {
        let mut product = tee();
        product
            .variants
            .push(variant("blue-s-dup", &[("Color", "Blue"), ("Size", "S")], false));
        let selection = Selection::from_pairs([("Color", "Blue"), ("Size", "S")]);
        assert_eq!(resolve(&product, &selection).map(|v| v.id.as_str()), Some("blue-s"));
    }

    #[test]
    fn variantless_product_never_resolves() {
        let mut product = tee();
        product.variants.clear();
        let selection = Selection::from_pairs([("Color", "Red"), ("Size", "S")]);
        assert!(resolve(&product, &selection).is_none());
    }
}
