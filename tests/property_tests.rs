//! Property-based tests for sampling and the distance metrics.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use twosample::distance::ALL_METRICS;
use twosample::sampling::{equalize, generate};

/// Bounded finite sample of the given length range
fn arb_sample(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-50.0f64..50.0, len)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Mixture length is the sum of its segment sizes.
    #[test]
    fn generate_length_is_total_size(
        segments in proptest::collection::vec((-100.0f64..100.0, 0.0f64..10.0, 0usize..50), 0..8),
        seed in any::<u64>(),
    ) {
        let means: Vec<f64> = segments.iter().map(|s| s.0).collect();
        let stddevs: Vec<f64> = segments.iter().map(|s| s.1).collect();
        let sizes: Vec<usize> = segments.iter().map(|s| s.2).collect();
        let mut rng = StdRng::seed_from_u64(seed);

        let sample = generate(&means, &stddevs, &sizes, &mut rng).unwrap();
        prop_assert_eq!(sample.len(), sizes.iter().sum::<usize>());
        prop_assert!(sample.iter().all(|v| v.is_finite()));
    }

    /// Equalized samples have the smaller length and draw from the originals.
    #[test]
    fn equalize_truncates_to_min(
        a in arb_sample(0..60),
        b in arb_sample(0..60),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (ea, eb) = equalize(&a, &b, &mut rng);
        let m = a.len().min(b.len());
        prop_assert_eq!(ea.len(), m);
        prop_assert_eq!(eb.len(), m);
        prop_assert!(ea.iter().all(|v| a.contains(v)));
        prop_assert!(eb.iter().all(|v| b.contains(v)));
    }

    /// Every metric that accepts a pair of samples returns a finite,
    /// non-negative score.
    #[test]
    fn metrics_are_non_negative(
        a in arb_sample(6..40),
        b in arb_sample(6..40),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        for metric in ALL_METRICS {
            if let Ok(d) = metric.evaluate(&a, &b, &mut rng) {
                prop_assert!(d.is_finite() && d >= 0.0, "{} gave {}", metric.name, d);
            }
        }
    }

    /// A shifted copy never looks closer than the sample itself.
    #[test]
    fn self_distance_is_minimal(
        a in arb_sample(6..40),
        shift in 1.0f64..100.0,
    ) {
        let b: Vec<f64> = a.iter().map(|v| v + shift).collect();
        let mut rng = StdRng::seed_from_u64(0);
        for name in ["mean_distance", "wasserstein_distance", "energy_distance", "kolmogorov_smirnov"] {
            let metric = twosample::distance::find_metric(name).unwrap();
            let same = metric.evaluate(&a, &a, &mut rng).unwrap();
            let cross = metric.evaluate(&a, &b, &mut rng).unwrap();
            prop_assert!(same <= cross, "{}: same {} > cross {}", name, same, cross);
        }
    }
}
