use crate::error::{require_finite, require_len, Result};
use crate::probability::{cramer_von_mises_exact_sf, cramer_von_mises_limit_cdf};
use crate::stats::{rank_average, sorted};

use super::TestResult;

const TEST: &str = "cramervonmises_2samp";

/// Largest sample size for which the exact null distribution is used
const MAX_EXACT_SIZE: usize = 20;

/// Two-sample Cramér-von Mises test (Anderson 1962)
///
/// With pooled average ranks `r`, the statistic is
///
/// ```text
/// U = nx Σ (r_xi − i)² + ny Σ (r_yj − j)²
/// T = U / (k N) − (4k − 1) / (6N),   k = nx·ny,  N = nx + ny
/// ```
///
/// When neither sample exceeds 20 observations the p-value is exact: the
/// share of all interleavings of the pooled sample whose `U` is at least
/// the observed one. Otherwise it comes from the limiting distribution
/// after standardizing `T` with its exact mean and variance.
pub fn cramervonmises_2samp(x: &[f64], y: &[f64]) -> Result<TestResult> {
    require_len(TEST, 2, x, y)?;
    require_finite(TEST, &[x, y])?;

    let xs = sorted(x);
    let ys = sorted(y);
    let nx = xs.len();
    let ny = ys.len();

    let pooled: Vec<f64> = xs.iter().chain(ys.iter()).copied().collect();
    let ranks = rank_average(&pooled);
    let (rx, ry) = ranks.split_at(nx);

    let squared_offsets = |r: &[f64]| -> f64 {
        r.iter()
            .enumerate()
            .map(|(i, &rank)| {
                let diff = rank - (i + 1) as f64;
                diff * diff
            })
            .sum()
    };
    let u = nx as f64 * squared_offsets(rx) + ny as f64 * squared_offsets(ry);

    if nx.max(ny) <= MAX_EXACT_SIZE {
        let pvalue = cramer_von_mises_exact_sf(u, nx, ny);
        return Ok(TestResult {
            statistic: statistic_t(u, nx as f64, ny as f64),
            pvalue,
        });
    }

    let nx = nx as f64;
    let ny = ny as f64;
    let k = nx * ny;
    let n = nx + ny;
    let t = statistic_t(u, nx, ny);

    let et = (1.0 + 1.0 / n) / 6.0;
    let vt = (n + 1.0) * (4.0 * k * n - 3.0 * (nx * nx + ny * ny) - 2.0 * k)
        / (45.0 * n * n * 4.0 * k);
    let tn = 1.0 / 6.0 + (t - et) / (45.0 * vt).sqrt();

    let pvalue = if tn < 0.003 {
        1.0
    } else {
        (1.0 - cramer_von_mises_limit_cdf(tn)).max(0.0)
    };

    Ok(TestResult { statistic: t, pvalue })
}

fn statistic_t(u: f64, nx: f64, ny: f64) -> f64 {
    let k = nx * ny;
    let n = nx + ny;
    u / (k * n) - (4.0 * k - 1.0) / (6.0 * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DistanceError;

    #[test]
    fn test_identical_samples_have_unit_pvalue() {
        let a: Vec<f64> = (0..30).map(|i| (i as f64 * 0.37).sin()).collect();
        let r = cramervonmises_2samp(&a, &a).unwrap();
        assert!(r.statistic.abs() < 1e-12);
        assert_eq!(r.pvalue, 1.0);
    }

    #[test]
    fn test_shifted_samples_rejected() {
        let a: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let b: Vec<f64> = (0..40).map(|i| i as f64 + 30.0).collect();
        let r = cramervonmises_2samp(&a, &b).unwrap();
        assert!(r.statistic > 1.0);
        assert!(r.pvalue < 1e-4);
    }

    #[test]
    fn test_interleaved_samples_not_rejected() {
        let a: Vec<f64> = (0..40).map(|i| (2 * i) as f64).collect();
        let b: Vec<f64> = (0..40).map(|i| (2 * i + 1) as f64).collect();
        let r = cramervonmises_2samp(&a, &b).unwrap();
        assert!(r.pvalue > 0.5);
    }

    #[test]
    fn test_symmetry() {
        let a = [0.3, 1.7, 2.2, 0.9, 1.1, 3.4, 2.9];
        let b = [1.5, 2.5, 0.1, 4.2];
        let ab = cramervonmises_2samp(&a, &b).unwrap();
        let ba = cramervonmises_2samp(&b, &a).unwrap();
        assert!((ab.statistic - ba.statistic).abs() < 1e-12);
        assert!((ab.pvalue - ba.pvalue).abs() < 1e-12);
    }

    #[test]
    fn test_exact_pvalue_disjoint() {
        // only the two extreme interleavings of 5 + 5 reach the observed U
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [6.0, 7.0, 8.0, 9.0, 10.0];
        let r = cramervonmises_2samp(&a, &b).unwrap();
        assert!((r.pvalue - 2.0 / 252.0).abs() < 1e-15);
    }

    #[test]
    fn test_exact_pvalue_matches_enumeration() {
        // positions 0..9 split into 4 x-values and 5 y-values
        let observed_x = [0.0, 3.0, 4.0, 8.0];
        let observed_y = [1.0, 2.0, 5.0, 6.0, 7.0];
        let observed = cramervonmises_2samp(&observed_x, &observed_y).unwrap();

        let mut hits = 0;
        let mut total = 0;
        for mask in 0u32..(1 << 9) {
            if mask.count_ones() != 4 {
                continue;
            }
            let (x, y): (Vec<f64>, Vec<f64>) =
                (0..9).map(f64::from).partition(|&v| mask & (1 << v as u32) != 0);
            total += 1;
            let t = cramervonmises_2samp(&x, &y).unwrap().statistic;
            if t >= observed.statistic - 1e-12 {
                hits += 1;
            }
        }
        assert_eq!(total, 126);
        assert!((observed.pvalue - hits as f64 / total as f64).abs() < 1e-15);
    }

    #[test]
    fn test_requires_two_observations() {
        assert!(matches!(
            cramervonmises_2samp(&[1.0], &[1.0, 2.0]),
            Err(DistanceError::InsufficientSampleSize { required: 2, .. })
        ));
    }
}
