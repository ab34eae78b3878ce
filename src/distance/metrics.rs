//! The eight distance metrics
//!
//! Each has the [`DistanceFn`](super::DistanceFn) shape. The conventions
//! differ on purpose: the test-based metrics report `1 − p`, except
//! Epps-Singleton which reports its raw statistic. The harness only
//! compares values within one metric, so no common scale is needed.

use rand::RngCore;

use crate::error::{require_len, Result};
use crate::hypothesis::{
    alexandergovern, cramervonmises_2samp, epps_singleton_2samp, ks_2samp, ttest_rel,
};
use crate::sampling::equalize;
use crate::stats::mean;

use super::transport;

/// `|mean(first) − mean(second)|`
pub fn mean_distance(first: &[f64], second: &[f64], _rng: &mut dyn RngCore) -> Result<f64> {
    require_len("mean_distance", 1, first, second)?;
    Ok((mean(first) - mean(second)).abs())
}

/// `1 − p` of the two-sample Kolmogorov-Smirnov test
pub fn kolmogorov_smirnov(first: &[f64], second: &[f64], _rng: &mut dyn RngCore) -> Result<f64> {
    Ok(ks_2samp(first, second)?.confidence())
}

/// Raw Epps-Singleton statistic `W`
pub fn epps_singleton(first: &[f64], second: &[f64], _rng: &mut dyn RngCore) -> Result<f64> {
    Ok(epps_singleton_2samp(first, second)?.statistic)
}

/// `1 − p` of the two-sample Cramér-von Mises test
pub fn cramer_distance(first: &[f64], second: &[f64], _rng: &mut dyn RngCore) -> Result<f64> {
    Ok(cramervonmises_2samp(first, second)?.confidence())
}

/// `1 − p` of the Alexander-Govern test on the two samples
pub fn alexander_distance(first: &[f64], second: &[f64], _rng: &mut dyn RngCore) -> Result<f64> {
    Ok(alexandergovern(&[first, second])?.confidence())
}

/// `1 − p` of a paired t-test after equalizing the samples
///
/// The only randomized metric: pairs come from independent subsamples.
pub fn ttest_distance(first: &[f64], second: &[f64], rng: &mut dyn RngCore) -> Result<f64> {
    let (a, b) = equalize(first, second, rng);
    Ok(ttest_rel(&a, &b)?.confidence())
}

pub fn wasserstein_distance(first: &[f64], second: &[f64], _rng: &mut dyn RngCore) -> Result<f64> {
    transport::wasserstein_distance(first, second)
}

pub fn energy_distance(first: &[f64], second: &[f64], _rng: &mut dyn RngCore) -> Result<f64> {
    transport::energy_distance(first, second)
}
