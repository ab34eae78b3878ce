//! Metric evaluation
//!
//! - `harness`: one trial, four distances, misclassification count
//! - `driver`: repeated trials over the height profiles and the per-metric
//!   error rate

pub mod driver;
pub mod harness;

pub use driver::{run_all, run_metric, run_metric_with, MetricReport, TrialConfig, TrialSamples};
pub use harness::{evaluate, Misclassification, PairwiseDistances, TrialResult};
