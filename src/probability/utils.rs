//! Tail probabilities of the reference distributions used by the tests
//!
//! Thin wrappers over `statrs` that turn construction failures into
//! [`DistanceError::Distribution`].

use statrs::distribution::{ChiSquared, ContinuousCDF, StudentsT};

use crate::error::{DistanceError, Result};

/// Upper tail `P(X > x)` of a chi-squared distribution with `df` degrees
/// of freedom
///
/// # Examples
///
/// ```
/// use twosample::probability::utils::chi_squared_sf;
///
/// let p = chi_squared_sf(3.841, 1.0).unwrap();
/// assert!((p - 0.05).abs() < 1e-3);
/// ```
#[inline]
pub fn chi_squared_sf(x: f64, df: f64) -> Result<f64> {
    let dist = ChiSquared::new(df).map_err(|e| DistanceError::Distribution(e.to_string()))?;
    Ok(dist.sf(x))
}

/// Two-sided p-value `2 P(T > |t|)` of a Student t statistic
///
/// # Examples
///
/// ```
/// use twosample::probability::utils::students_t_two_sided;
///
/// let p = students_t_two_sided(2.228, 10.0).unwrap();
/// assert!((p - 0.05).abs() < 1e-3);
/// ```
#[inline]
pub fn students_t_two_sided(t: f64, df: f64) -> Result<f64> {
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| DistanceError::Distribution(e.to_string()))?;
    Ok((2.0 * dist.sf(t.abs())).min(1.0))
}
