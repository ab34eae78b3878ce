//! Two-sample distance metrics
//!
//! A metric maps two samples to a dissimilarity score. All metrics share
//! the [`DistanceFn`] signature so the evaluation harness can take any of
//! them as a plain function pointer. The random source is only consumed by
//! [`ttest_distance`](metrics::ttest_distance).
//!
//! # Example
//!
//! ```
//! use rand::prelude::*;
//! use twosample::distance::{find_metric, ALL_METRICS};
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let b = [4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//!
//! for metric in ALL_METRICS {
//!     let d = metric.evaluate(&a, &b, &mut rng).unwrap();
//!     assert!(d >= 0.0, "{} gave {}", metric.name, d);
//! }
//!
//! let mean = find_metric("mean_distance").unwrap();
//! assert_eq!(mean.evaluate(&a, &b, &mut rng).unwrap(), 3.0);
//! ```

pub mod metrics;
mod transport;

use rand::RngCore;

use crate::error::Result;

pub use metrics::{
    alexander_distance, cramer_distance, epps_singleton, kolmogorov_smirnov, mean_distance,
    ttest_distance,
};
pub use transport::{energy_distance, wasserstein_distance};

/// Shared calling contract of every distance metric
pub type DistanceFn = fn(&[f64], &[f64], &mut dyn RngCore) -> Result<f64>;

/// A distance metric with its report name
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub name: &'static str,
    pub distance: DistanceFn,
}

impl Metric {
    #[inline]
    pub fn evaluate(&self, first: &[f64], second: &[f64], rng: &mut dyn RngCore) -> Result<f64> {
        (self.distance)(first, second, rng)
    }
}

/// Every metric, in report order
pub const ALL_METRICS: [Metric; 8] = [
    Metric { name: "wasserstein_distance", distance: metrics::wasserstein_distance },
    Metric { name: "energy_distance", distance: metrics::energy_distance },
    Metric { name: "mean_distance", distance: mean_distance },
    Metric { name: "kolmogorov_smirnov", distance: kolmogorov_smirnov },
    Metric { name: "epps_singleton", distance: epps_singleton },
    Metric { name: "cramer_distance", distance: cramer_distance },
    Metric { name: "alexander_distance", distance: alexander_distance },
    Metric { name: "ttest_distance", distance: ttest_distance },
];

/// Look a metric up by its report name
pub fn find_metric(name: &str) -> Option<Metric> {
    ALL_METRICS.iter().copied().find(|m| m.name == name)
}
