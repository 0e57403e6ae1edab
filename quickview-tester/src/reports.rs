use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::runner::ScenarioResult;

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    (passed as f64 / results.len() as f64) * 100.0
}

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Scenario Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===========================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Total runs: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{status} {} (seed {})",
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    if let (Some(fastest), Some(slowest)) = (
        results.iter().min_by_key(|r| r.average_duration),
        results.iter().max_by_key(|r| r.average_duration),
    ) {
        writeln!(out, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        writeln!(
            out,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.average_duration
        )?;
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.average_duration
        )?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(out: &mut W, results: &[ScenarioResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    generated_at: DateTime<Utc>,
) -> Result<()> {
    writeln!(out, "# Quickview Scenario Results\n")?;
    writeln!(out, "_Generated {}_\n", generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total runs**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {status} {} (seed {})\n", result.scenario_name, result.seed)?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: "Reachability sweep".into(),
            seed: 1337,
            passed,
            iterations_run: 2,
            successful_iterations: usize::from(passed) * 2,
            failures: if passed {
                Vec::new()
            } else {
                vec!["Iteration 1 (seed 1337): boom".into()]
            },
            average_duration: Duration::from_millis(2),
        }
    }

    #[test]
    fn markdown_lists_failures() {
        let mut out = Vec::new();
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).single().expect("valid date");
        generate_markdown_report(&mut out, &[sample(true), sample(false)], at).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("_Generated 2026-01-02 03:04:05 UTC_"));
        assert!(text.contains("- **Success rate**: 50.0%"));
        assert!(text.contains("  - Iteration 1 (seed 1337): boom"));
    }

    #[test]
    fn json_is_an_array_of_results() {
        let mut out = Vec::new();
        generate_json_report(&mut out, &[sample(true)]).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(value[0]["seed"], 1337);
    }

    #[test]
    fn console_handles_no_results() {
        let mut out = Vec::new();
        generate_console_report(&mut out, &[], Duration::ZERO).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Success rate: 0.0%"));
        assert!(!text.contains("Performance Summary"));
    }
}
