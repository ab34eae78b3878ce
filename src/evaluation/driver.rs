//! Repeated trials and per-metric error rates
//!
//! Every trial draws four fresh samples (train and test for each class),
//! runs the harness once and adds its warnings to the metric's total.
//! Nothing carries over between trials or between metrics except the
//! random source.

use std::fmt;

use rand::prelude::*;
use tracing::{debug, info};

use crate::distance::Metric;
use crate::error::Result;
use crate::sampling::{HeightProfile, Sample, SizeRange};

use super::harness::{evaluate, TrialResult};

const DEFAULT_TRAIN_RANGE: SizeRange = SizeRange::fixed(80, 101);
const DEFAULT_TEST_RANGE: SizeRange = SizeRange::fixed(40, 51);

/// Trial-loop parameters
#[derive(Debug, Clone, PartialEq)]
pub struct TrialConfig {
    pub iterations: usize,
    /// Monthly segment sizes of the train samples
    pub train_range: SizeRange,
    /// Monthly segment sizes of the test samples
    pub test_range: SizeRange,
    /// `None` seeds from system entropy
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            iterations: 5000,
            train_range: DEFAULT_TRAIN_RANGE,
            test_range: DEFAULT_TEST_RANGE,
            seed: None,
        }
    }
}

impl TrialConfig {
    /// Random source for a run
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }
}

/// The four samples of one trial; class A is the first population
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSamples {
    pub a_train: Sample,
    pub b_train: Sample,
    pub a_test: Sample,
    pub b_test: Sample,
}

impl TrialSamples {
    /// Boys (class A) against girls (class B)
    pub fn draw_heights(config: &TrialConfig, rng: &mut dyn RngCore) -> Result<Self> {
        let b_train = HeightProfile::Girls.generate(config.train_range, rng)?;
        let a_train = HeightProfile::Boys.generate(config.train_range, rng)?;
        let a_test = HeightProfile::Boys.generate(config.test_range, rng)?;
        let b_test = HeightProfile::Girls.generate(config.test_range, rng)?;
        Ok(Self {
            a_train,
            b_train,
            a_test,
            b_test,
        })
    }

    pub fn evaluate(&self, metric: &Metric, rng: &mut dyn RngCore) -> Result<TrialResult> {
        evaluate(
            &self.a_train,
            &self.b_train,
            &self.a_test,
            &self.b_test,
            metric.distance,
            rng,
        )
    }
}

/// Total misclassifications of one metric over a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricReport {
    pub name: &'static str,
    pub trials: usize,
    pub total_warnings: u64,
}

impl MetricReport {
    /// Share of misclassified test samples, in percent. Each trial has two.
    pub fn error_percentage(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_warnings as f64 / (2 * self.trials) as f64 * 100.0
    }
}

impl fmt::Display for MetricReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "num_warnings for {}: {}", self.name, self.total_warnings)?;
        write!(f, "total_error_percentage: {:.2}%", self.error_percentage())
    }
}

/// Run `iterations` trials of `metric`, drawing each trial's samples with `draw`
pub fn run_metric_with<F>(
    metric: &Metric,
    iterations: usize,
    rng: &mut dyn RngCore,
    mut draw: F,
) -> Result<MetricReport>
where
    F: FnMut(&mut dyn RngCore) -> Result<TrialSamples>,
{
    info!(metric = metric.name, iterations, "evaluating metric");

    let mut total_warnings = 0u64;
    for trial in 0..iterations {
        let samples = draw(rng)?;
        let result = samples.evaluate(metric, rng)?;
        debug!(
            metric = metric.name,
            trial,
            warnings = result.warnings,
            distances = ?result.distances,
            "trial finished"
        );
        total_warnings += u64::from(result.warnings);
    }

    let report = MetricReport {
        name: metric.name,
        trials: iterations,
        total_warnings,
    };
    info!(
        metric = metric.name,
        total_warnings,
        error_percentage = report.error_percentage(),
        "metric finished"
    );
    Ok(report)
}

/// Run the height-profile experiment for one metric
pub fn run_metric(
    metric: &Metric,
    config: &TrialConfig,
    rng: &mut dyn RngCore,
) -> Result<MetricReport> {
    run_metric_with(metric, config.iterations, rng, |rng| {
        TrialSamples::draw_heights(config, rng)
    })
}

/// Run the height-profile experiment for each metric in turn, sharing one
/// random source seeded from `config`
pub fn run_all(metrics: &[Metric], config: &TrialConfig) -> Result<Vec<MetricReport>> {
    let mut rng = config.rng();
    metrics
        .iter()
        .map(|m| run_metric(m, config, &mut rng))
        .collect()
}
