//! Descriptive statistics over plain `f64` slices
//!
//! These are the building blocks of the two-sample tests: moments,
//! interpolated percentiles, empirical CDF counts and tie-averaged ranks.
//!
//! # Examples
//!
//! ```
//! use twosample::stats::{mean, iqr};
//!
//! let heights = [118.2, 121.5, 119.9, 124.0];
//! let centre = mean(&heights);
//! let spread = iqr(&heights);
//! assert!(centre > 118.0 && spread > 0.0);
//! ```

pub mod core;

pub use self::core::{
    count_le, iqr, mean, percentile, percentile_sorted, rank_average, sorted, stddev, variance,
};
