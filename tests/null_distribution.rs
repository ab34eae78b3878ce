//! When both classes come from one population, a metric cannot do better
//! than chance: roughly half of all test samples end up "misclassified".

use rand::RngCore;
use twosample::evaluation::{run_metric_with, TrialSamples};
use twosample::prelude::*;

fn same_population(rng: &mut dyn RngCore) -> Result<TrialSamples> {
    let train = SizeRange::new(20, 31)?;
    let test = SizeRange::new(10, 16)?;
    Ok(TrialSamples {
        a_train: HeightProfile::Boys.generate(train, rng)?,
        b_train: HeightProfile::Boys.generate(train, rng)?,
        a_test: HeightProfile::Boys.generate(test, rng)?,
        b_test: HeightProfile::Boys.generate(test, rng)?,
    })
}

#[test]
fn test_error_rate_near_half_under_null() {
    for metric in ALL_METRICS {
        let mut rng = TrialConfig {
            seed: Some(1234),
            ..TrialConfig::default()
        }
        .rng();
        let report = run_metric_with(&metric, 1000, &mut rng, same_population).unwrap();
        let pct = report.error_percentage();
        assert!(
            pct > 30.0 && pct < 70.0,
            "{} error rate under null: {:.2}%",
            metric.name,
            pct
        );
    }
}

#[test]
fn test_height_profiles_are_distinguishable() {
    // boys vs girls must beat the null rate for the location metrics
    let config = TrialConfig {
        iterations: 300,
        seed: Some(99),
        ..TrialConfig::default()
    };
    for name in ["mean_distance", "wasserstein_distance", "alexander_distance"] {
        let metric = find_metric(name).unwrap();
        let report = run_all(&[metric], &config).unwrap()[0];
        assert!(
            report.error_percentage() < 30.0,
            "{} error rate {:.2}%",
            name,
            report.error_percentage()
        );
    }
}
