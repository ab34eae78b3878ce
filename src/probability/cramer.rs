//! Limiting distribution of the Cramér-von Mises statistic
//!
//! Uses the series of Csörgő and Faraway (1996):
//!
//! ```text
//! F(x) = Σ_{k≥0} Γ(k+½) / (Γ(k+1) π^{3/2} √x) · √(4k+1) · e^{-q} · K_{1/4}(q),
//!        q = (4k+1)² / (16x)
//! ```
//!
//! where `K_ν` is the modified Bessel function of the second kind.
//!
//! Small samples use the exact distribution of the rank statistic `U`
//! instead, see [`cramer_von_mises_exact_sf`].

use std::collections::HashMap;
use std::f64::consts::PI;

use statrs::function::gamma::ln_gamma;

const TERM_TOLERANCE: f64 = 1e-7;
const MAX_TERMS: usize = 1000;

/// CDF of the limiting Cramér-von Mises distribution
///
/// # Examples
///
/// ```
/// use twosample::probability::cramer_von_mises_limit_cdf;
///
/// // upper 5% point of the limiting distribution is 0.46136
/// let p = 1.0 - cramer_von_mises_limit_cdf(0.46136);
/// assert!((p - 0.05).abs() < 1e-3);
/// ```
pub fn cramer_von_mises_limit_cdf(x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }

    let scale = PI.powf(1.5) * x.sqrt();
    let mut total = 0.0;
    for k in 0..MAX_TERMS {
        let kf = k as f64;
        let u = (ln_gamma(kf + 0.5) - ln_gamma(kf + 1.0)).exp() / scale;
        let y = 4.0 * kf + 1.0;
        let q = y * y / (16.0 * x);
        let term = u * y.sqrt() * (-q).exp() * bessel_k(0.25, q);
        total += term;
        if term.abs() < TERM_TOLERANCE {
            break;
        }
    }
    total
}

/// Modified Bessel function of the second kind, `K_ν(z)` for `z > 0`
///
/// Evaluated from `K_ν(z) = ∫₀^∞ exp(-z cosh t) cosh(ν t) dt` with the
/// trapezoidal rule, which converges geometrically for this integrand.
pub fn bessel_k(nu: f64, z: f64) -> f64 {
    const STEP: f64 = 0.05;
    // exp(-z) underflows beyond this
    const UNDERFLOW: f64 = 700.0;

    if z <= 0.0 {
        return f64::INFINITY;
    }
    if z > UNDERFLOW {
        return 0.0;
    }

    let integrand = |t: f64| (-z * t.cosh()).exp() * (nu * t).cosh();

    let mut sum = 0.5 * integrand(0.0);
    let mut t = STEP;
    // stop once the integrand is e^-50 below its value at t = 0
    while z * (t.cosh() - 1.0) <= 50.0 + nu.abs() * t {
        sum += integrand(t);
        t += STEP;
    }
    sum * STEP
}

/// Exact `P(U ≥ u)` for the two-sample rank statistic with sizes `nx`, `ny`
///
/// Without ties, walking the pooled sorted sample adds `nx·j²` for an
/// x-value preceded by `j` y-values and `ny·i²` for a y-value preceded by
/// `i` x-values, which sums to `U`. Counting every lattice path from
/// `(0, 0)` to `(nx, ny)` by its accumulated `U` gives the null
/// distribution. Cost grows quickly with size; intended for samples of a
/// few dozen at most.
///
/// # Examples
///
/// ```
/// use twosample::probability::cramer_von_mises_exact_sf;
///
/// assert_eq!(cramer_von_mises_exact_sf(0.0, 4, 6), 1.0);
/// ```
pub fn cramer_von_mises_exact_sf(u: f64, nx: usize, ny: usize) -> f64 {
    // counts[j]: accumulated U -> number of paths reaching (i, j)
    let mut counts: Vec<HashMap<u64, u64>> = Vec::new();
    for i in 0..=nx {
        let mut column: Vec<HashMap<u64, u64>> = Vec::with_capacity(ny + 1);
        for j in 0..=ny {
            let mut here = HashMap::new();
            if i == 0 && j == 0 {
                here.insert(0, 1);
            }
            if i > 0 {
                let step = (nx * j * j) as u64;
                for (&s, &c) in &counts[j] {
                    *here.entry(s + step).or_insert(0) += c;
                }
            }
            if j > 0 {
                let step = (ny * i * i) as u64;
                for (&s, &c) in &column[j - 1] {
                    *here.entry(s + step).or_insert(0) += c;
                }
            }
            column.push(here);
        }
        counts = column;
    }

    let threshold = u - 1e-9 * u.abs().max(1.0);
    let (hits, total) = counts[ny]
        .iter()
        .fold((0u64, 0u64), |(hits, total), (&s, &c)| {
            let hits = if s as f64 >= threshold { hits + c } else { hits };
            (hits, total + c)
        });
    hits as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bessel_k_half_order() {
        // K_{1/2}(z) = sqrt(π / 2z) e^{-z}
        for &z in &[0.01f64, 0.5, 1.0, 5.0, 30.0] {
            let exact = (PI / (2.0 * z)).sqrt() * (-z).exp();
            let approx = bessel_k(0.5, z);
            assert!(
                ((approx - exact) / exact).abs() < 1e-10,
                "K_1/2({}) = {} expected {}",
                z,
                approx,
                exact
            );
        }
    }

    #[test]
    fn test_bessel_k_quarter_order() {
        // K_{1/4}(1) from tables
        assert!((bessel_k(0.25, 1.0) - 0.430_739_774_4).abs() < 1e-9);
    }

    #[test]
    fn test_limit_cdf_upper_points() {
        // Anderson & Darling (1952) upper tail points
        let cases = [(0.34730, 0.10), (0.46136, 0.05), (0.74346, 0.01)];
        for (x, alpha) in cases {
            let p = 1.0 - cramer_von_mises_limit_cdf(x);
            assert!((p - alpha).abs() < 1e-3, "x={} p={} expected {}", x, p, alpha);
        }
    }

    #[test]
    fn test_exact_distribution_totals() {
        // U is a sum of squares
        assert_eq!(cramer_von_mises_exact_sf(0.0, 7, 3), 1.0);
        // largest U for 5 + 5 is 625, reached by the two extreme orders
        assert!((cramer_von_mises_exact_sf(625.0, 5, 5) - 2.0 / 252.0).abs() < 1e-15);
        assert_eq!(cramer_von_mises_exact_sf(626.0, 5, 5), 0.0);
    }

    #[test]
    fn test_exact_at_largest_exact_size() {
        let p = cramer_von_mises_exact_sf(120_000.0, 20, 20);
        assert!((p - 0.005_506_296_868_680).abs() < 1e-12, "{}", p);
    }

    #[test]
    fn test_limit_cdf_is_monotone() {
        let mut prev = 0.0;
        for i in 1..40 {
            let v = cramer_von_mises_limit_cdf(i as f64 * 0.05);
            assert!(v >= prev - 1e-9);
            prev = v;
        }
        assert!(prev > 0.999 && prev < 1.0 + 1e-6);
    }
}
