//! Exact null distribution of the two-sample Kolmogorov-Smirnov statistic
//!
//! Under the null hypothesis every interleaving of the two sorted samples
//! is equally likely, so the pooled order is a uniform lattice path from
//! `(0, 0)` to `(n1, n2)`. `D ≥ d` exactly when the path touches one of the
//! two diagonal lines `|i/n1 − j/n2| = d`.
//!
//! Statistic values live on the grid `h / lcm(n1, n2)`; all band checks are
//! done in integers on that grid.

/// `P(D ≥ d)` for samples of sizes `n1` and `n2`
///
/// Equal sizes use the closed-form reflection sum. Unequal sizes walk the
/// lattice column by column, tracking for each point the probability that
/// a uniform path reaching it has already left the band. Both forms are
/// convex combinations of values in `[0, 1]` and cannot overflow.
///
/// # Examples
///
/// ```
/// use twosample::probability::smirnov_sf;
///
/// // both orders of two disjoint samples of five
/// assert!((smirnov_sf(5, 5, 1.0) - 2.0 / 252.0).abs() < 1e-15);
/// assert_eq!(smirnov_sf(4, 7, 0.0), 1.0);
/// ```
pub fn smirnov_sf(n1: usize, n2: usize, d: f64) -> f64 {
    if n1 == 0 || n2 == 0 || !(d > 0.0) {
        return 1.0;
    }
    let g = gcd(n1, n2);
    let lcm = (n1 / g) as f64 * n2 as f64;
    let h = (d * lcm).round() as usize;
    if h == 0 {
        return 1.0;
    }

    let p = if n1 == n2 {
        outside_square(n1, h)
    } else {
        outside_band(n1.max(n2), n1.min(n2), g, h)
    };
    p.clamp(0.0, 1.0)
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Equal sizes: `2 Σ_k (−1)^{k+1} C(2n, n − kh) / C(2n, n)`, in nested
/// form so no term cancels another.
fn outside_square(n: usize, h: usize) -> f64 {
    let mut p = 0.0;
    for k in (0..=n / h).rev() {
        let mut ratio = 1.0;
        for j in 0..h {
            // once the numerator reaches zero the whole term vanishes
            let num = (n - k * h).saturating_sub(j) as f64;
            ratio = num * ratio / (n + k * h + j + 1) as f64;
        }
        p = ratio * (1.0 - p);
    }
    2.0 * p
}

/// Unequal sizes, `m > n`: probability that a uniform path to `(m, n)`
/// leaves `|ng·i − mg·j| < h`.
///
/// `out[j]` holds the value at `(i, j)` for the current column `i`.
/// Points outside the band are 1; inside,
/// `out(i, j) = (i·out(i−1, j) + j·out(i, j−1)) / (i + j)`.
/// The band only moves up as `i` grows, so one array is updated in place.
fn outside_band(m: usize, n: usize, g: usize, h: usize) -> f64 {
    let mg = (m / g) as i64;
    let ng = (n / g) as i64;
    let h = h as i64;
    let top = n as i64;

    let mut out = vec![1.0; n + 1];

    // column 0: inside while mg·j < h
    let mut lo = 0i64;
    let hi = ((h - 1) / mg).min(top);
    for v in out.iter_mut().take(hi as usize + 1) {
        *v = 0.0;
    }

    for i in 1..=m as i64 {
        let below = ng * i - h;
        let new_lo = if below < 0 { 0 } else { below / mg + 1 };
        let new_hi = ((ng * i + h - 1) / mg).min(top);
        if new_lo > new_hi {
            return 1.0;
        }

        // points that dropped below the band
        for j in lo..new_lo.min(top + 1) {
            out[j as usize] = 1.0;
        }

        let fi = i as f64;
        for j in new_lo..=new_hi {
            let ju = j as usize;
            let left = if ju == 0 { 0.0 } else { out[ju - 1] };
            let fj = j as f64;
            out[ju] = (fi * out[ju] + fj * left) / (fi + fj);
        }
        lo = new_lo;
    }

    out[n]
}
