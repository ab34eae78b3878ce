//! # twosample
//!
//! Empirical comparison of two-sample distance metrics.
//!
//! Each metric maps a pair of samples to a dissimilarity score. The crate
//! draws train and test samples from two close populations (monthly child
//! height profiles), asks every metric whether each test sample lies closer
//! to its own class's train sample, and reports how often it does not.
//!
//! ## Design
//!
//! - **f64 only**: all samples and scores are `f64`
//! - **Seedable**: every random draw goes through one caller-provided RNG
//! - **Fail fast**: invalid inputs return [`DistanceError`], never panic
//!
//! ## Modules
//!
//! - `stats`: mean, variance, percentiles, ranks
//! - `matrix`: symmetric eigendecomposition and pseudo-inverse
//! - `probability`: limiting distributions and p-value helpers
//! - `hypothesis`: two-sample tests (KS, Cramér-von Mises, Epps-Singleton,
//!   Alexander-Govern, paired t)
//! - `sampling`: normal mixtures, height profiles, sample equalization
//! - `distance`: the eight metrics behind one function-pointer type
//! - `evaluation`: single-trial harness and the repeated-trial driver
//!
//! ## Example
//!
//! ```rust
//! use twosample::prelude::*;
//!
//! let config = TrialConfig {
//!     iterations: 20,
//!     seed: Some(7),
//!     ..TrialConfig::default()
//! };
//! let mean = find_metric("mean_distance").unwrap();
//! let reports = run_all(&[mean], &config).unwrap();
//!
//! assert_eq!(reports[0].trials, 20);
//! println!("{}", reports[0]);
//! ```

pub mod error;
pub mod stats;
pub mod matrix;
pub mod probability;
pub mod hypothesis;
pub mod sampling;
pub mod distance;
pub mod evaluation;

pub use error::{DistanceError, Result};

/// Common imports
pub mod prelude {
    pub use crate::error::{DistanceError, Result};

    // Sampling
    pub use crate::sampling::{equalize, generate, HeightProfile, MixtureSpec, Sample, SizeRange};

    // Metrics
    pub use crate::distance::{find_metric, DistanceFn, Metric, ALL_METRICS};

    // Evaluation
    pub use crate::evaluation::{
        evaluate,
        run_all,
        run_metric,
        MetricReport,
        TrialConfig,
        TrialResult,
    };
}
