//! Named logic scenarios runnable from the CLI
//!
//! Each scenario runs one iteration per call; the seed drives every random
//! choice so a failing iteration can be replayed with `--seeds`.

use anyhow::Result;
use async_trait::async_trait;

mod loading;
mod navigation;
mod variants;

#[async_trait(?Send)]
pub trait Scenario {
    /// CLI key, e.g. `reachability-sweep`.
    fn key(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn run(&self, seed: u64) -> Result<()>;
}

/// Every scenario in the order `all` runs them.
#[must_use]
pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(variants::ColorSizeWalkthrough),
        Box::new(variants::UnavailableCombination),
        Box::new(variants::ReachabilitySweep),
        Box::new(variants::OverrideReset),
        Box::new(navigation::NavigationRoundTrip),
        Box::new(navigation::IdempotentOpen),
        Box::new(loading::StaleResponse),
    ]
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<Box<dyn Scenario>> {
    all_scenarios()
        .into_iter()
        .find(|scenario| scenario.key().eq_ignore_ascii_case(key))
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    all_scenarios()
        .iter()
        .map(|scenario| (scenario.key(), scenario.description()))
        .collect()
}

/// Expand `all` and drop duplicates, keeping first-seen order.
#[must_use]
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for key in requested {
        if key.eq_ignore_ascii_case("all") {
            for scenario in all_scenarios() {
                if !keys.iter().any(|k| k == scenario.key()) {
                    keys.push(scenario.key().to_string());
                }
            }
        } else if !keys.contains(key) {
            keys.push(key.clone());
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_resolvable() {
        let scenarios = all_scenarios();
        for scenario in &scenarios {
            assert!(get_scenario(scenario.key()).is_some());
        }
        let mut keys: Vec<_> = scenarios.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), scenarios.len());
    }

    #[test]
    fn all_expands_once() {
        let keys = expand_scenarios(&["stale-response".into(), "all".into()]);
        assert_eq!(keys[0], "stale-response");
        assert_eq!(keys.len(), all_scenarios().len());
    }

    #[tokio::test]
    async fn every_scenario_passes_on_a_fixed_seed() {
        for scenario in all_scenarios() {
            for seed in [1, 1337, 0xC0FFEE] {
                if let Err(err) = scenario.run(seed).await {
                    panic!("{} failed on seed {seed}: {err:#}", scenario.key());
                }
            }
        }
    }
}
