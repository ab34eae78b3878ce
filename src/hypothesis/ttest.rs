use crate::error::{require_finite, require_len, DistanceError, Result};
use crate::probability::utils::students_t_two_sided;
use crate::stats::{mean, variance};

use super::TestResult;

const TEST: &str = "ttest_rel";

/// Two-sided paired-sample t-test
///
/// `x[i]` and `y[i]` are treated as a pair; the test asks whether the mean
/// of the differences is zero.
///
/// # Examples
///
/// ```
/// use twosample::hypothesis::ttest_rel;
///
/// let before = [12.0, 14.5, 11.8, 13.2, 15.1];
/// let after = [12.4, 15.3, 12.5, 13.9, 15.6];
/// let r = ttest_rel(&before, &after).unwrap();
/// assert!(r.statistic < 0.0);
/// assert!(r.pvalue < 0.01);
/// ```
pub fn ttest_rel(x: &[f64], y: &[f64]) -> Result<TestResult> {
    if x.len() != y.len() {
        return Err(DistanceError::DegenerateSample {
            test: TEST,
            reason: "paired samples must have equal length",
        });
    }
    require_len(TEST, 2, x, y)?;
    require_finite(TEST, &[x, y])?;

    let diffs: Vec<f64> = x.iter().zip(y).map(|(a, b)| a - b).collect();
    let n = diffs.len() as f64;
    let v = variance(&diffs, 1);
    if !(v > 0.0) {
        return Err(DistanceError::DegenerateSample {
            test: TEST,
            reason: "paired differences have zero variance",
        });
    }

    let t = mean(&diffs) / (v / n).sqrt();
    let pvalue = students_t_two_sided(t, n - 1.0)?;
    Ok(TestResult { statistic: t, pvalue })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        // differences 1, 2, 3: mean 2, sd 1, t = 2 / (1/√3) = 2√3
        let x = [2.0, 4.0, 6.0];
        let y = [1.0, 2.0, 3.0];
        let r = ttest_rel(&x, &y).unwrap();
        assert!((r.statistic - 2.0 * 3f64.sqrt()).abs() < 1e-12);
        // two-sided p for t(2) = 3.4641 is 0.0742
        assert!((r.pvalue - 0.0742).abs() < 1e-3);
    }

    #[test]
    fn test_sign_flips_with_order() {
        let x = [1.0, 3.0, 2.5, 4.0];
        let y = [1.5, 2.0, 3.5, 5.5];
        let xy = ttest_rel(&x, &y).unwrap();
        let yx = ttest_rel(&y, &x).unwrap();
        assert!((xy.statistic + yx.statistic).abs() < 1e-12);
        assert!((xy.pvalue - yx.pvalue).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch_and_constant_differences() {
        assert!(ttest_rel(&[1.0, 2.0], &[1.0]).is_err());
        assert!(matches!(
            ttest_rel(&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0]),
            Err(DistanceError::DegenerateSample { .. })
        ));
    }
}
