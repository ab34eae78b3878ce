//! One-dimensional distances between empirical distributions
//!
//! Both distances integrate a power of `|U(x) − V(x)|` over the merged
//! support, where `U` and `V` are the empirical CDFs:
//!
//! - Wasserstein-1: `∫ |U − V| dx`
//! - Energy: `√2 · (∫ (U − V)² dx)^{1/2}`

use crate::error::{require_finite, require_len, Result};
use crate::stats::{count_le, sorted};

/// First Wasserstein (earth mover's) distance between two samples
///
/// # Examples
///
/// ```
/// use twosample::distance::wasserstein_distance;
///
/// let d = wasserstein_distance(&[0.0, 1.0, 3.0], &[5.0, 6.0, 8.0]).unwrap();
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
pub fn wasserstein_distance(u: &[f64], v: &[f64]) -> Result<f64> {
    require_len("wasserstein_distance", 1, u, v)?;
    require_finite("wasserstein_distance", &[u, v])?;
    Ok(cdf_distance(u, v, |diff| diff))
}

/// Energy distance between two samples
///
/// # Examples
///
/// ```
/// use twosample::distance::energy_distance;
///
/// let d = energy_distance(&[0.0], &[2.0]).unwrap();
/// assert!((d - 2.0).abs() < 1e-12);
/// ```
pub fn energy_distance(u: &[f64], v: &[f64]) -> Result<f64> {
    require_len("energy_distance", 1, u, v)?;
    require_finite("energy_distance", &[u, v])?;
    let integral = cdf_distance(u, v, |diff| diff * diff);
    Ok(std::f64::consts::SQRT_2 * integral.sqrt())
}

/// `∫ f(|U(x) − V(x)|) dx`, evaluated exactly on the piecewise-constant CDFs
fn cdf_distance(u: &[f64], v: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    let us = sorted(u);
    let vs = sorted(v);
    let nu = us.len() as f64;
    let nv = vs.len() as f64;

    let mut all: Vec<f64> = us.iter().chain(vs.iter()).copied().collect();
    all.sort_by(|a, b| a.total_cmp(b));

    let mut total = 0.0;
    for w in all.windows(2) {
        let delta = w[1] - w[0];
        if delta == 0.0 {
            continue;
        }
        let u_cdf = count_le(&us, w[0]) as f64 / nu;
        let v_cdf = count_le(&vs, w[0]) as f64 / nv;
        total += f((u_cdf - v_cdf).abs()) * delta;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasserstein_shift() {
        // a pure shift moves every unit of mass by the same amount
        let a = [1.0, 2.0, 4.0, 7.0];
        let b: Vec<f64> = a.iter().map(|x| x + 2.5).collect();
        assert!((wasserstein_distance(&a, &b).unwrap() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_unequal_sizes() {
        // U jumps to 1 at 0, V is 1/2 on [0, 1)
        let d = wasserstein_distance(&[0.0], &[0.0, 1.0]).unwrap();
        assert!((d - 0.5).abs() < 1e-12);

        let e = energy_distance(&[0.0], &[0.0, 1.0]).unwrap();
        assert!((e - std::f64::consts::SQRT_2 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_identical_samples_are_zero() {
        let a = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(wasserstein_distance(&a, &a).unwrap(), 0.0);
        assert_eq!(energy_distance(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = [0.2, 1.4, 2.9, 0.7];
        let b = [1.1, 3.3, 0.5];
        let ab = wasserstein_distance(&a, &b).unwrap();
        let ba = wasserstein_distance(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-12);
        let ab = energy_distance(&a, &b).unwrap();
        let ba = energy_distance(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(wasserstein_distance(&[], &[1.0]).is_err());
        assert!(energy_distance(&[1.0], &[]).is_err());
    }
}
