use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenarios::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct ScenarioRunner {
    verbose: bool,
}

impl ScenarioRunner {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// One result per seed; iteration `i` runs with `seed + i`.
    pub async fn run_scenario(
        &self,
        scenario: &dyn Scenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::with_capacity(seeds.len());
        for &seed in seeds {
            if self.verbose {
                println!(
                    "🧪 Testing scenario: {} (seed: {seed})",
                    scenario.name().bright_white()
                );
            }
            results.push(self.run_single(scenario, seed, iterations).await);
        }
        results
    }

    async fn run_single(&self, scenario: &dyn Scenario, seed: u64, iterations: usize) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut timings = Vec::new();

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let start = Instant::now();
            match scenario.run(iteration_seed).await {
                Ok(()) => {
                    successes += 1;
                    let duration = start.elapsed();
                    timings.push(duration);
                    if self.verbose {
                        println!("  ✅ Iteration {}/{iterations} passed ({duration:?})", i + 1);
                    }
                }
                Err(err) => {
                    log::debug!("{} failed on seed {iteration_seed}: {err:?}", scenario.key());
                    let message = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if timings.is_empty() {
            Duration::ZERO
        } else {
            timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name().to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX)))
    }
}
