use crate::error::{require_finite, DistanceError, Result};
use crate::probability::utils::chi_squared_sf;
use crate::stats::{mean, stddev};

use super::TestResult;

const TEST: &str = "alexandergovern";

/// Alexander-Govern test for equality of means under unequal variances
///
/// Each group's one-sample t statistic against the variance-weighted
/// common mean is pushed through Hill's normalizing transformation; the
/// statistic `A = Σ zᵢ²` is compared against χ² with `k − 1` degrees of
/// freedom for `k` groups.
///
/// # Examples
///
/// ```
/// use twosample::hypothesis::alexandergovern;
///
/// let a = [4.1, 5.2, 4.8, 5.0, 4.6];
/// let b = [9.8, 10.4, 10.1, 9.7, 10.3];
/// let r = alexandergovern(&[&a, &b]).unwrap();
/// assert!(r.pvalue < 0.01);
/// ```
pub fn alexandergovern(samples: &[&[f64]]) -> Result<TestResult> {
    if samples.len() < 2 {
        return Err(DistanceError::DegenerateSample {
            test: TEST,
            reason: "at least two groups are required",
        });
    }
    for s in samples {
        if s.len() < 2 {
            return Err(DistanceError::InsufficientSampleSize {
                test: TEST,
                required: 2,
                actual: s.len(),
            });
        }
    }
    require_finite(TEST, samples)?;

    let lengths: Vec<f64> = samples.iter().map(|s| s.len() as f64).collect();
    let means: Vec<f64> = samples.iter().map(|s| mean(s)).collect();
    let standard_errors: Vec<f64> = samples
        .iter()
        .zip(&lengths)
        .map(|(s, &n)| stddev(s, 1) / n.sqrt())
        .collect();
    if standard_errors.iter().any(|&se| !(se > 0.0)) {
        return Err(DistanceError::DegenerateSample {
            test: TEST,
            reason: "every group needs nonzero variance",
        });
    }

    // variance-weighted estimate of the common mean
    let inv_sq_se: Vec<f64> = standard_errors.iter().map(|se| 1.0 / (se * se)).collect();
    let total: f64 = inv_sq_se.iter().sum();
    let var_w: f64 = inv_sq_se
        .iter()
        .zip(&means)
        .map(|(w, m)| w / total * m)
        .sum();

    let mut a_stat = 0.0;
    for ((&m, &se), &n) in means.iter().zip(&standard_errors).zip(&lengths) {
        let t = (m - var_w) / se;
        let v = n - 1.0;
        let a = v - 0.5;
        let b = 48.0 * a * a;
        let c = (a * (1.0 + t * t / v).ln()).sqrt();

        let z = c + (c.powi(3) + 3.0 * c) / b
            - (4.0 * c.powi(7) + 33.0 * c.powi(5) + 240.0 * c.powi(3) + 855.0 * c)
                / (b * b * 10.0 + 8.0 * b * c.powi(4) + 1000.0 * b);
        a_stat += z * z;
    }

    let pvalue = chi_squared_sf(a_stat, (samples.len() - 1) as f64)?;
    Ok(TestResult {
        statistic: a_stat,
        pvalue,
    })
}
