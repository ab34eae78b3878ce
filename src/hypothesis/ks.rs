use crate::error::{require_finite, require_len, Result};
use crate::probability::{kolmogorov_sf, smirnov_sf};
use crate::stats::{count_le, sorted};

use super::TestResult;

const TEST: &str = "ks_2samp";

/// Largest sample size for which the exact null distribution is used
const MAX_EXACT_SIZE: usize = 10_000;

/// Two-sided two-sample Kolmogorov-Smirnov test
///
/// The statistic is `D = sup |F₁(x) − F₂(x)|` over the pooled sample, with
/// right-continuous empirical CDFs.
///
/// While both samples have at most 10 000 observations the
/// p-value is exact (see [`smirnov_sf`]). Larger samples use the limiting
/// Kolmogorov distribution at the effective size `en = n·m / (n + m)` with
/// Stephens' correction `λ = (√en + 0.12 + 0.11/√en) · D`.
pub fn ks_2samp(x: &[f64], y: &[f64]) -> Result<TestResult> {
    require_len(TEST, 1, x, y)?;
    require_finite(TEST, &[x, y])?;

    let xs = sorted(x);
    let ys = sorted(y);
    let n1 = xs.len() as f64;
    let n2 = ys.len() as f64;

    let mut d = 0.0f64;
    for &v in xs.iter().chain(ys.iter()) {
        let cdf1 = count_le(&xs, v) as f64 / n1;
        let cdf2 = count_le(&ys, v) as f64 / n2;
        d = d.max((cdf1 - cdf2).abs());
    }

    let pvalue = if xs.len().max(ys.len()) <= MAX_EXACT_SIZE {
        smirnov_sf(xs.len(), ys.len(), d)
    } else {
        let en = (n1 * n2 / (n1 + n2)).sqrt();
        kolmogorov_sf((en + 0.12 + 0.11 / en) * d)
    };

    Ok(TestResult { statistic: d, pvalue })
}
