//! Synthetic sample generation
//!
//! - [`generate`] / [`MixtureSpec`]: piecewise-normal mixtures
//! - [`HeightProfile`]: the two reference populations with random monthly sizes
//! - [`equalize`]: common-length subsampling for paired tests
//!
//! All randomness comes from the caller's `Rng`, so a seeded `StdRng`
//! makes every draw reproducible.

mod equalize;
mod mixture;

pub use equalize::equalize;
pub use mixture::{generate, HeightProfile, MixtureSpec, Segment, SizeRange};

/// A realization of a population: an ordered run of real values
pub type Sample = Vec<f64>;
