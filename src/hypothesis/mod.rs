//! Two-sample hypothesis tests
//!
//! Every test takes two (or more) independent samples and returns the test
//! statistic together with its p-value under the null hypothesis that the
//! samples share a distribution (or, for the location tests, a mean).
//!
//! | Test | Statistic | Null distribution |
//! |------|-----------|-------------------|
//! | [`ks_2samp`] | sup of ECDF difference | Kolmogorov (asymptotic, Stephens-corrected) |
//! | [`cramervonmises_2samp`] | rank-based ω² | limiting Cramér-von Mises |
//! | [`epps_singleton_2samp`] | ECF quadratic form | χ² with rank degrees of freedom |
//! | [`alexandergovern`] | Σ of normalized t² | χ² with k−1 degrees of freedom |
//! | [`ttest_rel`] | paired t | Student t with n−1 degrees of freedom |
//!
//! # Example
//!
//! ```
//! use twosample::hypothesis::ks_2samp;
//!
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let b = [10.0, 11.0, 12.0, 13.0, 14.0];
//! let result = ks_2samp(&a, &b).unwrap();
//! assert_eq!(result.statistic, 1.0);
//! assert!(result.pvalue < 0.05);
//! ```

mod alexander_govern;
mod cramer_von_mises;
mod epps_singleton;
mod ks;
mod ttest;

pub use alexander_govern::alexandergovern;
pub use cramer_von_mises::cramervonmises_2samp;
pub use epps_singleton::{epps_singleton_2samp, epps_singleton_2samp_at, DEFAULT_EVALUATION_POINTS};
pub use ks::ks_2samp;
pub use ttest::ttest_rel;

/// Outcome of a hypothesis test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    pub statistic: f64,
    pub pvalue: f64,
}

impl TestResult {
    /// `1 - pvalue`, the dissimilarity convention used by most distances
    #[inline]
    pub fn confidence(&self) -> f64 {
        1.0 - self.pvalue
    }
}
