//! Pairwise train/test comparison for one metric
//!
//! Given a train and a test sample from each of two classes, a metric acts
//! as a discriminator when every test sample is closer to its own class's
//! train sample than to the other class's. Each violated ordering is one
//! misclassification. This checks ordinal consistency only; it is not a
//! significance test.

use rand::RngCore;
use tracing::warn;

use crate::distance::DistanceFn;
use crate::error::Result;

/// The four train-vs-test distances of a two-class experiment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseDistances {
    /// `metric(a_train, a_test)`
    pub a_train_test: f64,
    /// `metric(b_train, b_test)`
    pub b_train_test: f64,
    /// `metric(a_train, b_test)`
    pub a_train_b_test: f64,
    /// `metric(b_train, a_test)`
    pub b_train_a_test: f64,
}

/// Which class's test sample was judged closer to the other class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Misclassification {
    /// Class A test sample closer to B's train sample
    First,
    /// Class B test sample closer to A's train sample
    Second,
}

impl Misclassification {
    pub fn message(&self) -> &'static str {
        match self {
            Self::First => "could not specify correct class for the first distribution",
            Self::Second => "could not specify correct class for the second distribution",
        }
    }
}

impl PairwiseDistances {
    /// Misclassifications implied by these distances, at most one per class.
    ///
    /// Ties are not misclassifications.
    pub fn misclassifications(&self) -> Vec<Misclassification> {
        let mut out = Vec::with_capacity(2);
        if self.b_train_a_test < self.a_train_test {
            out.push(Misclassification::First);
        }
        if self.a_train_b_test < self.b_train_test {
            out.push(Misclassification::Second);
        }
        out
    }
}

/// Outcome of one trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    /// 0, 1 or 2
    pub warnings: u32,
    pub distances: PairwiseDistances,
}

/// Apply `metric` to the four train/test pairings and count misclassifications
///
/// Distances are computed in the order same-B, same-A, A-train vs B-test,
/// B-train vs A-test; randomized metrics draw from `rng` in that order.
/// Each misclassification is logged as a warning and counted, never
/// raised.
pub fn evaluate(
    a_train: &[f64],
    b_train: &[f64],
    a_test: &[f64],
    b_test: &[f64],
    metric: DistanceFn,
    rng: &mut dyn RngCore,
) -> Result<TrialResult> {
    let b_train_test = metric(b_train, b_test, rng)?;
    let a_train_test = metric(a_train, a_test, rng)?;
    let a_train_b_test = metric(a_train, b_test, rng)?;
    let b_train_a_test = metric(b_train, a_test, rng)?;

    let distances = PairwiseDistances {
        a_train_test,
        b_train_test,
        a_train_b_test,
        b_train_a_test,
    };

    let mut warnings = 0;
    for miss in distances.misclassifications() {
        let (same, cross) = match miss {
            Misclassification::First => (a_train_test, b_train_a_test),
            Misclassification::Second => (b_train_test, a_train_b_test),
        };
        warn!(same, cross, "{}", miss.message());
        warnings += 1;
    }

    Ok(TrialResult { warnings, distances })
}
