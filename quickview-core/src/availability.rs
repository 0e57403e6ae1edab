//! Per-value reachability of option choices
//!
//! A value is reachable when some available variant holds it while agreeing
//! with every *other* dimension of the current selection. Every pair is
//! evaluated from scratch on each selection change; the catalogs this runs
//! against are small enough that a linear scan per query is fine.

use serde::{Deserialize, Serialize};

use crate::model::Product;
use crate::selection::Selection;

/// Whether choosing `candidate` for `dimension` keeps a purchasable variant in reach.
///
/// The currently active value gets no special treatment: it is reported
/// disabled when its own combination is unavailable.
#[must_use]
pub fn is_value_reachable(
    product: &Product,
    selection: &Selection,
    dimension: &str,
    candidate: &str,
) -> bool {
    product.variants.iter().any(|variant| {
        variant.available_for_sale
            && variant.value_for(dimension) == Some(candidate)
            && variant.selected_options.iter().all(|opt| {
                opt.name == dimension || selection.get(&opt.name) == Some(opt.value.as_str())
            })
    })
}

/// Render state of one candidate value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValueState {
    pub value: String,
    pub active: bool,
    pub enabled: bool,
}

/// Render state of one offered dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRow {
    pub name: String,
    pub values: Vec<OptionValueState>,
}

impl OptionRow {
    #[must_use]
    pub fn value(&self, value: &str) -> Option<&OptionValueState> {
        self.values.iter().find(|state| state.value == value)
    }

    /// The value that owns the row's single Tab stop: the active value when
    /// it can be chosen, otherwise the first enabled value.
    #[must_use]
    pub fn tab_stop(&self) -> Option<&OptionValueState> {
        self.values
            .iter()
            .find(|state| state.active && state.enabled)
            .or_else(|| self.values.iter().find(|state| state.enabled))
    }
}

/// Evaluate every (offered dimension, value) pair for the current selection.
#[must_use]
pub fn availability_matrix(product: &Product, selection: &Selection) -> Vec<OptionRow> {
    product
        .offered_options()
        .map(|option| OptionRow {
            name: option.name.clone(),
            values: option
                .values
                .iter()
                .map(|value| OptionValueState {
                    value: value.clone(),
                    active: selection.get(&option.name) == Some(value.as_str()),
                    enabled: is_value_reachable(product, selection, &option.name, value),
                })
                .collect(),
        })
        .collect()
}

/// Direction of a keyboard step through a dimension's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Forward,
    Backward,
}

impl StepDirection {
    /// Arrow keys map onto steps; everything else is ignored.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(Self::Forward),
            "ArrowLeft" | "ArrowUp" => Some(Self::Backward),
            _ => None,
        }
    }
}

/// Next value for `dimension` in `direction`, wrapping around and skipping
/// values that are not reachable.
///
/// Returns `None` when no other value is enabled, so the keyboard can never
/// land on a value a pointer click could not select.
#[must_use]
pub fn step_enabled_value<'p>(
    product: &'p Product,
    selection: &Selection,
    dimension: &str,
    direction: StepDirection,
) -> Option<&'p str> {
    let option = product.option(dimension)?;
    let len = option.values.len();
    if len < 2 {
        return None;
    }
    let current = selection
        .get(dimension)
        .and_then(|active| option.values.iter().position(|v| v == active));
    let start = current.unwrap_or(match direction {
        StepDirection::Forward => len - 1,
        StepDirection::Backward => 0,
    });
    (1..=len)
        .map(|offset| match direction {
            StepDirection::Forward => (start + offset) % len,
            StepDirection::Backward => (start + len - offset % len) % len,
        })
        .filter(|idx| Some(*idx) != current)
        .map(|idx| option.values[idx].as_str())
        .find(|value| is_value_reachable(product, selection, dimension, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{tee, variant};
    use crate::model::OptionDimension;

    fn brute_force(product: &Product, selection: &Selection, dim: &str, value: &str) -> bool {
        product.variants.iter().filter(|v| v.available_for_sale).any(|v| {
            product.options.iter().all(|opt| {
                let held = v.value_for(&opt.name);
                if opt.name == dim {
                    held == Some(value)
                } else {
                    held == selection.get(&opt.name)
                }
            })
        })
    }

    #[test]
    fn blue_m_is_unreachable_because_it_does_not_exist() {
        let product = tee();
        let selection = Selection::from_pairs([("Color", "Blue"), ("Size", "S")]);
        assert!(!is_value_reachable(&product, &selection, "Size", "M"));
        assert!(is_value_reachable(&product, &selection, "Size", "S"));
        assert!(is_value_reachable(&product, &selection, "Color", "Red"));
    }

    #[test]
    fn active_value_follows_the_same_rule() {
        let product = tee();
        let selection = Selection::from_pairs([("Color", "Red"), ("Size", "M")]);
        // (Red, M) is unavailable, so the active Size=M renders disabled.
        assert!(!is_value_reachable(&product, &selection, "Size", "M"));
        assert!(is_value_reachable(&product, &selection, "Size", "S"));
        // Neither colour has an available M.
        assert!(!is_value_reachable(&product, &selection, "Color", "Red"));
        assert!(!is_value_reachable(&product, &selection, "Color", "Blue"));
    }

    #[test]
    fn matches_brute_force_for_every_pair() {
        let mut product = tee();
        product.options.push(OptionDimension::new("Fit", ["Slim", "Loose"]));
        product.variants = vec![
            variant("1", &[("Color", "Red"), ("Size", "S"), ("Fit", "Slim")], true),
            variant("2", &[("Color", "Red"), ("Size", "M"), ("Fit", "Loose")], true),
            variant("3", &[("Color", "Blue"), ("Size", "S"), ("Fit", "Loose")], false),
            variant("4", &[("Color", "Blue"), ("Size", "M"), ("Fit", "Slim")], true),
        ];
        let colors = ["Red", "Blue"];
        let sizes = ["S", "M"];
        let fits = ["Slim", "Loose"];
        for c in colors {
            for s in sizes {
                for f in fits {
                    let selection = Selection::from_pairs([("Color", c), ("Size", s), ("Fit", f)]);
                    for option in &product.options {
                        for value in &option.values {
                            assert_eq!(
                                is_value_reachable(&product, &selection, &option.name, value),
                                brute_force(&product, &selection, &option.name, value),
                                "{c}/{s}/{f} {}={value}",
                                option.name
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn matrix_marks_active_and_enabled_values() {
        let product = tee();
        let selection = Selection::from_first_variant(&product);
        let rows = availability_matrix(&product, &selection);
        assert_eq!(rows.len(), 2);
        let size = rows.iter().find(|row| row.name == "Size").expect("size row");
        let small = size.value("S").expect("S");
        assert!(small.active && small.enabled);
        let medium = size.value("M").expect("M");
        assert!(!medium.active && !medium.enabled);
    }

    #[test]
    fn matrix_skips_sentinel_dimension() {
        let mut product = tee();
        product.options = vec![OptionDimension::new("Title", ["Default Title"])];
        product.variants = vec![variant("only", &[("Title", "Default Title")], true)];
        let selection = Selection::from_first_variant(&product);
        assert!(availability_matrix(&product, &selection).is_empty());
    }

    #[test]
    fn keyboard_step_skips_disabled_values() {
        let mut product = tee();
        product.options[1] = OptionDimension::new("Size", ["S", "M", "L"]);
        product
            .variants
            .push(variant("red-l", &[("Color", "Red"), ("Size", "L")], true));
        let selection = Selection::from_pairs([("Color", "Red"), ("Size", "S")]);
        assert_eq!(
            step_enabled_value(&product, &selection, "Size", StepDirection::Forward),
            Some("L")
        );
        assert_eq!(
            step_enabled_value(&product, &selection, "Size", StepDirection::Backward),
            Some("L")
        );
    }

    #[test]
    fn keyboard_step_stays_put_without_alternatives() {
        let product = tee();
        let selection = Selection::from_pairs([("Color", "Blue"), ("Size", "S")]);
        assert_eq!(
            step_enabled_value(&product, &selection, "Size", StepDirection::Forward),
            None
        );
        assert_eq!(
            step_enabled_value(&product, &selection, "Color", StepDirection::Backward),
            Some("Red")
        );
    }

    #[test]
    fn tab_stop_moves_off_a_stale_active_value() {
        let product = tee();
        let stale = Selection::from_pairs([("Color", "Red"), ("Size", "M")]);
        let rows = availability_matrix(&product, &stale);
        let size = rows.iter().find(|row| row.name == "Size").expect("size row");
        assert_eq!(size.tab_stop().map(|s| s.value.as_str()), Some("S"));
        let color = rows.iter().find(|row| row.name == "Color").expect("color row");
        assert!(color.tab_stop().is_none());

        let fresh = Selection::from_pairs([("Color", "Red"), ("Size", "S")]);
        let rows = availability_matrix(&product, &fresh);
        assert!(rows.iter().all(|row| row.tab_stop().is_some_and(|s| s.active)));
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(StepDirection::from_key("ArrowDown"), Some(StepDirection::Forward));
        assert_eq!(StepDirection::from_key("ArrowLeft"), Some(StepDirection::Backward));
        assert_eq!(StepDirection::from_key("Enter"), None);
    }
}
