/// Arithmetic mean. `NaN` for an empty slice.
#[inline]
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / (data.len() as f64)
}

/// Variance with `ddof` delta degrees of freedom.
///
/// `ddof = 0` is the population (biased) estimate, `ddof = 1` the sample
/// estimate. NaN when `data` has no more than `ddof` values.
#[inline]
pub fn variance(data: &[f64], ddof: usize) -> f64 {
    if data.len() <= ddof {
        return f64::NAN;
    }
    let m = mean(data);
    let sum_sq: f64 = data
        .iter()
        .map(|&v| {
            let diff = v - m;
            diff * diff
        })
        .sum();

    sum_sq / (data.len() - ddof) as f64
}

#[inline]
pub fn stddev(data: &[f64], ddof: usize) -> f64 {
    variance(data, ddof).sqrt()
}

/// Percentile of already sorted data using linear interpolation
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty() && (0.0..=1.0).contains(&p));
    let idx = p * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let w = idx - lo as f64;
        sorted[lo] * (1.0 - w) + sorted[hi] * w
    }
}

/// Percentile using linear interpolation
pub fn percentile(data: &[f64], p: f64) -> f64 {
    percentile_sorted(&sorted(data), p)
}

/// Interquartile range (75th minus 25th percentile)
pub fn iqr(data: &[f64]) -> f64 {
    let s = sorted(data);
    percentile_sorted(&s, 0.75) - percentile_sorted(&s, 0.25)
}

/// Ascending copy of `data` under the IEEE total order.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// Number of elements of `sorted` that are `<= x`.
///
/// Evaluated at `x` and divided by the length this is the right-continuous
/// empirical CDF.
#[inline]
pub fn count_le(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|&v| v <= x)
}

/// 1-based ranks with ties sharing the average of their positions.
pub fn rank_average(data: &[f64]) -> Vec<f64> {
    let n = data.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| data[a].total_cmp(&data[b]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && data[order[end]] == data[order[start]] {
            end += 1;
        }
        // positions start..end hold ranks start+1..=end
        let avg = (start + 1 + end) as f64 / 2.0;
        for &i in &order[start..end] {
            ranks[i] = avg;
        }
        start = end;
    }
    ranks
}
