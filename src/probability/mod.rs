//! Reference distributions for two-sample test p-values
//!
//! - **Kolmogorov**: limiting law of the scaled KS statistic
//! - **Smirnov**: exact finite-sample law of the two-sample KS statistic
//! - **Cramér-von Mises**: limiting law of the normalized ω² statistic and
//!   the exact law of the rank statistic for small samples
//! - **Chi-squared / Student t**: via `statrs`, see [`utils`]

mod cramer;
mod kolmogorov;
mod smirnov;
pub mod utils;

pub use cramer::{bessel_k, cramer_von_mises_exact_sf, cramer_von_mises_limit_cdf};
pub use kolmogorov::kolmogorov_sf;
pub use smirnov::smirnov_sf;
