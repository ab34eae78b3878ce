//! # twosample
//!
//! Runs the boys-vs-girls height experiment for each distance metric and
//! prints its misclassification count and error percentage.
//!
//! ## Usage
//!
//! ```text
//! twosample
//! twosample --iterations 1000 --seed 42
//! twosample --metric mean_distance --metric kolmogorov_smirnov
//! twosample --train-min 20 --train-max 31 --test-min 10 --test-max 16
//! ```
//!
//! Every misclassified test sample is logged as a warning. `--quiet` keeps
//! only the final reports; `RUST_LOG` overrides both, e.g.
//! `RUST_LOG=twosample=debug` adds per-trial distances.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use twosample::distance::{find_metric, Metric, ALL_METRICS};
use twosample::evaluation::{run_all, TrialConfig};
use twosample::sampling::SizeRange;

const DEFAULT_FILTER: &str = "twosample=info";
const QUIET_FILTER: &str = "twosample=info,twosample::evaluation::harness=error";

const USAGE: &str = "Usage: twosample [--iterations N] [--seed N] [--metric NAME]... \
[--train-min N] [--train-max N] [--test-min N] [--test-max N] [--quiet]";

struct CliArgs {
    config: TrialConfig,
    metrics: Vec<Metric>,
    /// Drop per-trial misclassification warnings
    quiet: bool,
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let default_filter = if args.quiet { QUIET_FILTER } else { DEFAULT_FILTER };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        iterations = args.config.iterations,
        seed = ?args.config.seed,
        metrics = args.metrics.len(),
        "Starting two-sample metric evaluation"
    );

    match run_all(&args.metrics, &args.config) {
        Ok(reports) => {
            for report in &reports {
                println!("{}", report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "evaluation failed");
            ExitCode::FAILURE
        }
    }
}

/// `Ok(None)` means help was requested
fn parse_args<I>(args: I) -> Result<Option<CliArgs>, String>
where
    I: IntoIterator<Item = String>,
{
    let defaults = TrialConfig::default();
    let mut iterations = defaults.iterations;
    let mut seed = None;
    let mut metrics = Vec::new();
    let mut train = (defaults.train_range.minimum(), defaults.train_range.maximum());
    let mut test = (defaults.test_range.minimum(), defaults.test_range.maximum());
    let mut quiet = false;

    let mut args = args.into_iter();
    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("Missing value for {}", flag))
        };
        match flag.as_str() {
            "--iterations" => iterations = parse_number(&flag, &value()?)?,
            "--seed" => seed = Some(parse_number(&flag, &value()?)?),
            "--metric" => {
                let name = value()?;
                let metric = find_metric(&name).ok_or_else(|| {
                    let known: Vec<&str> = ALL_METRICS.iter().map(|m| m.name).collect();
                    format!("Unknown metric '{}'. Use one of: {}", name, known.join(", "))
                })?;
                metrics.push(metric);
            }
            "--train-min" => train.0 = parse_number(&flag, &value()?)?,
            "--train-max" => train.1 = parse_number(&flag, &value()?)?,
            "--test-min" => test.0 = parse_number(&flag, &value()?)?,
            "--test-max" => test.1 = parse_number(&flag, &value()?)?,
            "--quiet" | "-q" => quiet = true,
            "--help" | "-h" => return Ok(None),
            _ => return Err(format!("Unknown argument: {}", flag)),
        }
    }

    if metrics.is_empty() {
        metrics = ALL_METRICS.to_vec();
    }

    let train_range = SizeRange::new(train.0, train.1).map_err(|e| e.to_string())?;
    let test_range = SizeRange::new(test.0, test.1).map_err(|e| e.to_string())?;

    Ok(Some(CliArgs {
        config: TrialConfig {
            iterations,
            train_range,
            test_range,
            seed,
        },
        metrics,
        quiet,
    }))
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("Invalid value '{}' for {}", raw, flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = parse_args(args(&[])).unwrap().unwrap();
        assert_eq!(parsed.config, TrialConfig::default());
        assert_eq!(parsed.metrics.len(), ALL_METRICS.len());
        assert!(!parsed.quiet);
    }

    #[test]
    fn test_quiet_flag() {
        let parsed = parse_args(args(&["--quiet", "--iterations", "3"])).unwrap().unwrap();
        assert!(parsed.quiet);
        assert_eq!(parsed.config.iterations, 3);
        assert!(!DEFAULT_FILTER.contains("harness"));
        assert!(QUIET_FILTER.contains("harness=error"));
    }

    #[test]
    fn test_flags() {
        let parsed = parse_args(args(&[
            "--iterations", "12", "--seed", "3", "--metric", "mean_distance",
            "--metric", "cramer_distance", "--test-min", "5", "--test-max", "9",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(parsed.config.iterations, 12);
        assert_eq!(parsed.config.seed, Some(3));
        assert_eq!(parsed.config.test_range, SizeRange::new(5, 9).unwrap());
        let names: Vec<&str> = parsed.metrics.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["mean_distance", "cramer_distance"]);
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(args(&["--metric", "nope"])).is_err());
        assert!(parse_args(args(&["--iterations"])).is_err());
        assert!(parse_args(args(&["--seed", "abc"])).is_err());
        assert!(parse_args(args(&["--train-min", "200"])).is_err());
        assert!(parse_args(args(&["--frobnicate"])).is_err());
        assert!(parse_args(args(&["--help"])).unwrap().is_none());
    }
}
