//! Epps-Singleton test on the empirical characteristic function

use crate::error::{require_finite, require_len, DistanceError, Result};
use crate::matrix::Eigen;
use crate::probability::utils::chi_squared_sf;
use crate::stats::iqr;

use super::TestResult;

const TEST: &str = "epps_singleton_2samp";

/// Evaluation points of the empirical characteristic function, in units
/// of the pooled semi-interquartile range
pub const DEFAULT_EVALUATION_POINTS: [f64; 2] = [0.4, 0.8];

/// Relative eigenvalue cutoff for the covariance pseudo-inverse
const RCOND: f64 = 1e-15;

/// Epps-Singleton two-sample test at the default evaluation points
///
/// See [`epps_singleton_2samp_at`].
pub fn epps_singleton_2samp(x: &[f64], y: &[f64]) -> Result<TestResult> {
    epps_singleton_2samp_at::<2, 4>(x, y, DEFAULT_EVALUATION_POINTS)
}

/// Epps-Singleton two-sample test on the empirical characteristic function
///
/// Each observation is mapped to `(cos(t₁v), …, cos(t_Mv), sin(t₁v), …,
/// sin(t_Mv))` with `t` scaled by half the pooled IQR. The statistic is
///
/// ```text
/// W = N · (ḡx − ḡy)ᵀ Σ⁺ (ḡx − ḡy),   Σ = (N/nx) Σx + (N/ny) Σy
/// ```
///
/// with biased covariance estimates. `W` is asymptotically χ² with
/// `rank(Σ⁺)` degrees of freedom. A small-sample correction applies when
/// both samples have fewer than 25 observations.
///
/// `D` must equal `2 * M`.
pub fn epps_singleton_2samp_at<const M: usize, const D: usize>(
    x: &[f64],
    y: &[f64],
    points: [f64; M],
) -> Result<TestResult> {
    if D != 2 * M {
        return Err(DistanceError::DegenerateSample {
            test: TEST,
            reason: "feature dimension must be twice the number of evaluation points",
        });
    }
    require_len(TEST, 5, x, y)?;
    require_finite(TEST, &[x, y])?;
    if M == 0 || points.iter().any(|&t| !(t.is_finite() && t > 0.0)) {
        return Err(DistanceError::DegenerateSample {
            test: TEST,
            reason: "evaluation points must be positive and finite",
        });
    }

    let nx = x.len() as f64;
    let ny = y.len() as f64;
    let n = nx + ny;

    let pooled: Vec<f64> = x.iter().chain(y.iter()).copied().collect();
    let sigma = iqr(&pooled) / 2.0;
    if !(sigma > 0.0) {
        return Err(DistanceError::DegenerateSample {
            test: TEST,
            reason: "pooled sample has zero interquartile range",
        });
    }
    let ts = points.map(|t| t / sigma);

    let (mean_x, cov_x) = ecf_moments::<M, D>(x, &ts);
    let (mean_y, cov_y) = ecf_moments::<M, D>(y, &ts);

    let mut est_cov = [[0.0; D]; D];
    for i in 0..D {
        for j in 0..D {
            est_cov[i][j] = (n / nx) * cov_x[i][j] + (n / ny) * cov_y[i][j];
        }
    }

    let pinv = Eigen::decompose_symmetric(&est_cov).pseudo_inverse(RCOND);
    if pinv.rank == 0 {
        return Err(DistanceError::DegenerateSample {
            test: TEST,
            reason: "estimated covariance matrix is zero",
        });
    }
    if pinv.rank < D {
        tracing::warn!(
            rank = pinv.rank,
            dimension = D,
            "estimated covariance matrix does not have full rank"
        );
    }

    let mut g_diff = [0.0; D];
    for i in 0..D {
        g_diff[i] = mean_x[i] - mean_y[i];
    }

    // Σ⁺ is positive semi-definite; clamp rounding below zero
    let mut w = (n * pinv.quadratic_form(&g_diff)).max(0.0);

    if nx.max(ny) < 25.0 {
        let corr = 1.0 / (1.0 + n.powf(-0.45) + 10.1 * (nx.powf(-1.7) + ny.powf(-1.7)));
        w *= corr;
    }

    let pvalue = chi_squared_sf(w, pinv.rank as f64)?;
    Ok(TestResult { statistic: w, pvalue })
}

/// Mean vector and biased covariance of the ECF features of `data`
fn ecf_moments<const M: usize, const D: usize>(
    data: &[f64],
    ts: &[f64; M],
) -> ([f64; D], [[f64; D]; D]) {
    let feature = |v: f64| {
        let mut g = [0.0; D];
        for (k, &t) in ts.iter().enumerate() {
            g[k] = (t * v).cos();
            g[M + k] = (t * v).sin();
        }
        g
    };

    let len = data.len() as f64;
    let mut mean = [0.0; D];
    for &v in data {
        let g = feature(v);
        for i in 0..D {
            mean[i] += g[i];
        }
    }
    for m in mean.iter_mut() {
        *m /= len;
    }

    let mut cov = [[0.0; D]; D];
    for &v in data {
        let g = feature(v);
        for i in 0..D {
            let di = g[i] - mean[i];
            for j in 0..D {
                cov[i][j] += di * (g[j] - mean[j]);
            }
        }
    }
    for row in cov.iter_mut() {
        for c in row.iter_mut() {
            *c /= len;
        }
    }

    (mean, cov)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_distr::Normal;

    fn normal_sample(rng: &mut StdRng, mean: f64, std: f64, n: usize) -> Vec<f64> {
        let dist = Normal::new(mean, std).unwrap();
        (0..n).map(|_| dist.sample(rng)).collect()
    }

    #[test]
    fn test_identical_samples_give_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = normal_sample(&mut rng, 0.0, 1.0, 60);
        let r = epps_singleton_2samp(&a, &a).unwrap();
        assert_eq!(r.statistic, 0.0);
        assert!((r.pvalue - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_detects_shift() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = normal_sample(&mut rng, 0.0, 1.0, 200);
        let b = normal_sample(&mut rng, 1.5, 1.0, 200);
        let r = epps_singleton_2samp(&a, &b).unwrap();
        assert!(r.statistic > 20.0, "W = {}", r.statistic);
        assert!(r.pvalue < 1e-3);
    }

    #[test]
    fn test_symmetric_in_value() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = normal_sample(&mut rng, 0.0, 1.0, 40);
        let b = normal_sample(&mut rng, 0.3, 1.2, 30);
        let ab = epps_singleton_2samp(&a, &b).unwrap();
        let ba = epps_singleton_2samp(&b, &a).unwrap();
        assert!((ab.statistic - ba.statistic).abs() < 1e-8 * ab.statistic.max(1.0));
    }

    #[test]
    fn test_mismatched_feature_dimension() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [2.0, 3.5, 4.0, 6.0, 7.0];
        assert!(matches!(
            epps_singleton_2samp_at::<2, 3>(&a, &b, [0.4, 0.8]),
            Err(DistanceError::DegenerateSample { test: TEST, .. })
        ));
    }

    #[test]
    fn test_custom_points() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = normal_sample(&mut rng, 0.0, 1.0, 50);
        let b = normal_sample(&mut rng, 3.0, 1.0, 50);
        let r = epps_singleton_2samp_at::<3, 6>(&a, &b, [0.2, 0.5, 0.9]).unwrap();
        assert!(r.pvalue < 1e-3);
    }

    #[test]
    fn test_rejects_small_and_constant_samples() {
        let short = [1.0, 2.0, 3.0, 4.0];
        let ok = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(matches!(
            epps_singleton_2samp(&short, &ok),
            Err(DistanceError::InsufficientSampleSize { required: 5, .. })
        ));

        let flat = [2.0; 8];
        assert!(matches!(
            epps_singleton_2samp(&flat, &flat),
            Err(DistanceError::DegenerateSample { .. })
        ));
    }
}
