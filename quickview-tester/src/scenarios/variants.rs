use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use quickview_core::{
    Product, Selection, StepDirection, VariantSession, availability_matrix, resolve,
    step_enabled_value,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

use super::Scenario;
use crate::fixtures::{classic_tee, random_product};

const SELECTIONS_PER_PRODUCT: usize = 24;

pub struct ColorSizeWalkthrough;

#[async_trait(?Send)]
impl Scenario for ColorSizeWalkthrough {
    fn key(&self) -> &'static str {
        "color-size-walkthrough"
    }
    fn name(&self) -> &'static str {
        "Color/Size walkthrough"
    }
    fn description(&self) -> &'static str {
        "Switching Color keeps Size and resolves the matching variant"
    }

    async fn run(&self, _seed: u64) -> Result<()> {
        let mut session = VariantSession::new(classic_tee());
        ensure!(
            session.resolved().map(|v| v.id.as_str()) == Some("red-s"),
            "session should start on the first variant"
        );

        session.select("Color", "Blue")?;
        ensure!(session.selection().get("Size") == Some("S"), "Size was not kept");
        let resolved = session.resolved().context("Blue/S should resolve")?;
        ensure!(resolved.id == "blue-s", "resolved {} instead of blue-s", resolved.id);

        let display = session.display();
        ensure!(
            display.price.money().amount == Decimal::new(2199, 2),
            "price did not follow the variant"
        );
        ensure!(
            display.image.url() == Some("https://cdn.example.com/tee/blue.jpg"),
            "image did not follow the variant"
        );

        let rows = session.option_rows();
        let size = rows
            .iter()
            .find(|row| row.name == "Size")
            .context("Size row missing")?;
        ensure!(
            size.value("M").is_some_and(|m| !m.enabled),
            "Blue/M has no variant and must be disabled"
        );
        Ok(())
    }
}

pub struct UnavailableCombination;

#[async_trait(?Send)]
impl Scenario for UnavailableCombination {
    fn key(&self) -> &'static str {
        "unavailable-combination"
    }
    fn name(&self) -> &'static str {
        "Unavailable combination"
    }
    fn description(&self) -> &'static str {
        "An existing but unavailable variant blocks purchase and shows disabled"
    }

    async fn run(&self, _seed: u64) -> Result<()> {
        let mut session = VariantSession::new(classic_tee());
        session.select("Size", "M")?;
        let resolved = session.resolved().context("Red/M exists")?;
        ensure!(!resolved.available_for_sale, "Red/M should be unavailable");
        ensure!(!session.can_purchase(), "purchase must be blocked");
        ensure!(
            session.display().price.is_resolved(),
            "an existing variant still prices the view"
        );
        let rows = session.option_rows();
        let m = rows
            .iter()
            .find(|row| row.name == "Size")
            .and_then(|row| row.value("M"))
            .context("Size M missing")?;
        ensure!(m.active && !m.enabled, "active unavailable value must render disabled");
        Ok(())
    }
}

fn random_selection(rng: &mut ChaCha8Rng, product: &Product) -> Selection {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    for option in &product.options {
        // Occasionally leave a dimension unselected.
        if rng.gen_bool(0.1) {
            continue;
        }
        let value = &option.values[rng.gen_range(0..option.values.len())];
        pairs.push((option.name.as_str(), value.as_str()));
    }
    Selection::from_pairs(pairs)
}

fn brute_force_reachable(
    product: &Product,
    selection: &Selection,
    dimension: &str,
    candidate: &str,
) -> bool {
    product.variants.iter().any(|variant| {
        variant.available_for_sale
            && variant.value_for(dimension) == Some(candidate)
            && product
                .options
                .iter()
                .filter(|option| option.name != dimension)
                .all(|option| selection.get(&option.name) == variant.value_for(&option.name))
    })
}

fn brute_force_resolve<'p>(product: &'p Product, selection: &Selection) -> Option<&'p str> {
    product
        .variants
        .iter()
        .find(|variant| {
            product
                .options
                .iter()
                .all(|option| selection.get(&option.name) == variant.value_for(&option.name))
        })
        .map(|variant| variant.id.as_str())
}

pub struct ReachabilitySweep;

#[async_trait(?Send)]
impl Scenario for ReachabilitySweep {
    fn key(&self) -> &'static str {
        "reachability-sweep"
    }
    fn name(&self) -> &'static str {
        "Reachability sweep"
    }
    fn description(&self) -> &'static str {
        "Random catalogs: resolution and per-value availability match brute force"
    }

    async fn run(&self, seed: u64) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let product = random_product(&mut rng, &format!("sweep-{seed}"));
        for _ in 0..SELECTIONS_PER_PRODUCT {
            let selection = random_selection(&mut rng, &product);
            ensure!(
                resolve(&product, &selection).map(|v| v.id.as_str())
                    == brute_force_resolve(&product, &selection),
                "resolve disagrees with brute force for {selection:?}"
            );

            for row in availability_matrix(&product, &selection) {
                let active = row.values.iter().filter(|value| value.active).count();
                let expected_active = usize::from(selection.get(&row.name).is_some());
                ensure!(
                    active == expected_active,
                    "row {} has {active} active values",
                    row.name
                );
                for value in &row.values {
                    ensure!(
                        value.enabled
                            == brute_force_reachable(&product, &selection, &row.name, &value.value),
                        "{}={} enabled={} disagrees with brute force for {selection:?}",
                        row.name,
                        value.value,
                        value.enabled
                    );
                }
                for direction in [StepDirection::Forward, StepDirection::Backward] {
                    if let Some(next) = step_enabled_value(&product, &selection, &row.name, direction) {
                        ensure!(
                            row.value(next).is_some_and(|state| state.enabled && !state.active),
                            "stepping {} landed on {next}, which is disabled or current",
                            row.name
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

pub struct OverrideReset;

#[async_trait(?Send)]
impl Scenario for OverrideReset {
    fn key(&self) -> &'static str {
        "override-reset"
    }
    fn name(&self) -> &'static str {
        "Display override reset"
    }
    fn description(&self) -> &'static str {
        "Any single-dimension change clears a picked thumbnail"
    }

    async fn run(&self, seed: u64) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let product = random_product(&mut rng, &format!("override-{seed}"));
        let picked = product.images[0].clone();
        let mut session = VariantSession::new(product.clone());

        for option in &product.options {
            session.pick_image(picked.clone());
            if let Some(current) = session.selection().get(&option.name).map(str::to_string) {
                ensure!(!session.select(&option.name, &current)?, "re-selecting must be a no-op");
                ensure!(
                    session.override_image() == Some(&picked),
                    "re-selecting the same value dropped the override"
                );
            }
            let Some(other) = option
                .values
                .iter()
                .find(|value| session.selection().get(&option.name) != Some(value.as_str()))
            else {
                continue;
            };
            session.select(&option.name, other)?;
            ensure!(
                session.override_image().is_none(),
                "changing {} kept the override",
                option.name
            );
        }
        Ok(())
    }
}
