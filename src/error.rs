//! Error types for sample generation and two-sample statistics.

/// Errors raised while generating samples or evaluating a distance.
///
/// A misclassification in the evaluation harness is not an error; it is
/// counted and logged. Everything here aborts the current computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistanceError {
    /// A sample was shorter than the test needs.
    #[error("{test}: needs at least {required} observations per sample, got {actual}")]
    InsufficientSampleSize {
        test: &'static str,
        required: usize,
        actual: usize,
    },

    /// Mixture parameter sequences had different lengths.
    #[error("mixture spec mismatch: {means} means, {stddevs} stddevs, {sizes} sizes")]
    MismatchedSpec {
        means: usize,
        stddevs: usize,
        sizes: usize,
    },

    /// A mixture segment had a negative or non-finite standard deviation.
    #[error("segment {index}: invalid standard deviation {value}")]
    InvalidStdDev { index: usize, value: f64 },

    /// A uniform size draw was requested over an empty range.
    #[error("empty size range: minimum {minimum} must be below maximum {maximum}")]
    InvalidSizeRange { minimum: usize, maximum: usize },

    /// The input is valid in shape but the statistic is undefined on it.
    #[error("{test}: {reason}")]
    DegenerateSample {
        test: &'static str,
        reason: &'static str,
    },

    /// A reference distribution could not be built.
    #[error("reference distribution: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, DistanceError>;

/// Fails with [`DistanceError::InsufficientSampleSize`] when either sample
/// is shorter than `required`.
pub(crate) fn require_len(test: &'static str, required: usize, x: &[f64], y: &[f64]) -> Result<()> {
    let actual = x.len().min(y.len());
    if actual < required {
        return Err(DistanceError::InsufficientSampleSize {
            test,
            required,
            actual,
        });
    }
    Ok(())
}

/// Fails with [`DistanceError::DegenerateSample`] on NaN or infinite values.
pub(crate) fn require_finite(test: &'static str, samples: &[&[f64]]) -> Result<()> {
    if samples.iter().all(|s| s.iter().all(|v| v.is_finite())) {
        Ok(())
    } else {
        Err(DistanceError::DegenerateSample {
            test,
            reason: "samples must contain only finite values",
        })
    }
}
