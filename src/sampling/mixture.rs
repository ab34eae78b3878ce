//! Piecewise-normal mixture populations
//!
//! A mixture is a list of segments, each contributing `size` independent
//! draws from `N(mean, stddev²)`. Draws are concatenated in segment order.
//!
//! # Example
//!
//! ```
//! use rand::prelude::*;
//! use twosample::sampling::generate;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sample = generate(&[0.0, 10.0], &[1.0, 2.0], &[30, 20], &mut rng).unwrap();
//! assert_eq!(sample.len(), 50);
//! ```

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{DistanceError, Result};

use super::Sample;

/// One normal component of a mixture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub mean: f64,
    pub stddev: f64,
    pub size: usize,
}

/// Validated list of mixture segments
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureSpec {
    segments: Vec<Segment>,
}

impl MixtureSpec {
    /// Zip parallel parameter lists into a spec.
    ///
    /// Fails fast on lists of different length and on negative or
    /// non-finite standard deviations; nothing is truncated.
    pub fn from_parts(means: &[f64], stddevs: &[f64], sizes: &[usize]) -> Result<Self> {
        if means.len() != stddevs.len() || means.len() != sizes.len() {
            return Err(DistanceError::MismatchedSpec {
                means: means.len(),
                stddevs: stddevs.len(),
                sizes: sizes.len(),
            });
        }

        let segments = means
            .iter()
            .zip(stddevs)
            .zip(sizes)
            .map(|((&mean, &stddev), &size)| Segment { mean, stddev, size })
            .collect();
        Self::new(segments)
    }

    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        for (index, s) in segments.iter().enumerate() {
            if !(s.stddev.is_finite() && s.stddev >= 0.0) {
                return Err(DistanceError::InvalidStdDev {
                    index,
                    value: s.stddev,
                });
            }
        }
        Ok(Self { segments })
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total number of observations a draw produces
    #[inline]
    pub fn total_size(&self) -> usize {
        self.segments.iter().map(|s| s.size).sum()
    }

    /// Draw one realization of the mixture
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sample> {
        let mut out = Vec::with_capacity(self.total_size());
        for (index, s) in self.segments.iter().enumerate() {
            let dist = Normal::new(s.mean, s.stddev).map_err(|_| DistanceError::InvalidStdDev {
                index,
                value: s.stddev,
            })?;
            out.extend((0..s.size).map(|_| dist.sample(rng)));
        }
        Ok(out)
    }
}

/// Concatenated normal draws: `sizes[i]` values from `N(means[i], stddevs[i]²)`
/// for each `i`, in index order.
pub fn generate<R: Rng + ?Sized>(
    means: &[f64],
    stddevs: &[f64],
    sizes: &[usize],
    rng: &mut R,
) -> Result<Sample> {
    MixtureSpec::from_parts(means, stddevs, sizes)?.sample(rng)
}

/// Half-open `[minimum, maximum)` range for uniform segment-size draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    minimum: usize,
    maximum: usize,
}

impl SizeRange {
    pub fn new(minimum: usize, maximum: usize) -> Result<Self> {
        if minimum >= maximum {
            return Err(DistanceError::InvalidSizeRange { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    /// Range for `const` items; an empty range fails to compile there
    pub(crate) const fn fixed(minimum: usize, maximum: usize) -> Self {
        assert!(minimum < maximum, "size range must be non-empty");
        Self { minimum, maximum }
    }

    #[inline]
    pub fn minimum(&self) -> usize {
        self.minimum
    }

    #[inline]
    pub fn maximum(&self) -> usize {
        self.maximum
    }

    /// Uniform integer in `[minimum, maximum)`
    #[inline]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.minimum..self.maximum)
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        const DEFAULT: SizeRange = SizeRange::fixed(1, 100);
        DEFAULT
    }
}

// ===========================================================
// Reference height profiles (ages 6.5 to 7.5, one entry per month)
// ===========================================================

const BOYS_MEANS: [f64; 12] = [
    118.8700, 119.3508, 119.8303, 120.3085, 120.7853, 121.2604,
    121.7338, 122.2053, 122.6750, 123.1429, 123.6092, 124.0736,
];
const BOYS_STDDEVS: [f64; 12] = [
    5.1055, 5.1357, 5.1659, 5.1949, 5.2252, 5.2554,
    5.2857, 5.3159, 5.3462, 5.3764, 5.4067, 5.4369,
];
const GIRLS_MEANS: [f64; 12] = [
    117.9769, 118.4489, 118.9208, 119.3926, 119.8648, 120.3374,
    120.8105, 121.2843, 121.7587, 122.2338, 122.7098, 123.1868,
];
const GIRLS_STDDEVS: [f64; 12] = [
    5.2960, 5.3243, 5.3538, 5.3822, 5.4107, 5.4393,
    5.4667, 5.4954, 5.5230, 5.5519, 5.5796, 5.6062,
];

/// Two reference populations of child heights, twelve monthly segments each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightProfile {
    Boys,
    Girls,
}

impl HeightProfile {
    pub const MONTHS: usize = 12;

    pub fn label(&self) -> &'static str {
        match self {
            Self::Boys => "boys",
            Self::Girls => "girls",
        }
    }

    pub fn means(&self) -> &'static [f64; 12] {
        match self {
            Self::Boys => &BOYS_MEANS,
            Self::Girls => &GIRLS_MEANS,
        }
    }

    pub fn stddevs(&self) -> &'static [f64; 12] {
        match self {
            Self::Boys => &BOYS_STDDEVS,
            Self::Girls => &GIRLS_STDDEVS,
        }
    }

    /// Independent uniform size per month
    pub fn draw_sizes<R: Rng + ?Sized>(range: SizeRange, rng: &mut R) -> [usize; 12] {
        let mut sizes = [0; 12];
        for s in sizes.iter_mut() {
            *s = range.draw(rng);
        }
        sizes
    }

    /// Draw a population with a random segment size per month
    pub fn generate<R: Rng + ?Sized>(&self, range: SizeRange, rng: &mut R) -> Result<Sample> {
        let sizes = Self::draw_sizes(range, rng);
        generate(self.means(), self.stddevs(), &sizes, rng)
    }
}
