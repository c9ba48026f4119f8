use std::collections::BTreeMap;
use swingfit::advisor::{advise, Category, Severity};
use swingfit::config::AdvisorConfig;
use swingfit::telemetry::{Metric, MetricStat, SummaryRow};

fn row(entries: &[(Metric, f64)]) -> SummaryRow {
    let mut stats = BTreeMap::new();
    for &(metric, mean) in entries {
        stats.insert(metric, MetricStat { mean, std_dev: 0.0 });
    }
    SummaryRow {
        shaft_id: "x".to_string(),
        shots: 10,
        stats,
    }
}

#[test]
fn no_telemetry_emits_no_advisories() {
    let cfg = AdvisorConfig::default();
    assert!(advise(&row(&[]), None, &cfg).is_empty());
}

#[test]
fn spin_outside_window_triggers_loft_notes() {
    let cfg = AdvisorConfig::default();

    let out = advise(&row(&[(Metric::SpinRate, 4800.0)]), None, &cfg);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].category, Category::Loft);
    assert!(out[0].text.contains("under"));

    let out = advise(&row(&[(Metric::SpinRate, 7000.0)]), None, &cfg);
    assert_eq!(out[0].category, Category::Loft);
    assert!(out[0].text.contains("above"));

    assert!(advise(&row(&[(Metric::SpinRate, 5800.0)]), None, &cfg).is_empty());
}

#[test]
fn launch_outside_window_triggers_head_notes() {
    let cfg = AdvisorConfig::default();

    let out = advise(&row(&[(Metric::LaunchAngle, 10.5)]), None, &cfg);
    assert_eq!(out[0].category, Category::Head);
    assert!(out[0].text.contains("launch assistance"));

    let out = advise(&row(&[(Metric::LaunchAngle, 21.0)]), None, &cfg);
    assert!(out[0].text.contains("lower-launching"));

    assert!(advise(&row(&[(Metric::LaunchAngle, 16.0)]), None, &cfg).is_empty());
}

#[test]
fn shallow_landing_angle_is_a_warning() {
    let cfg = AdvisorConfig::default();
    let out = advise(&row(&[(Metric::LandingAngle, 43.0)]), None, &cfg);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Warn);
    assert!(out[0].text.contains("Landing angle"));

    assert!(advise(&row(&[(Metric::LandingAngle, 47.0)]), None, &cfg).is_empty());
}

#[test]
fn dynamic_lie_notes_name_the_direction() {
    let cfg = AdvisorConfig::default();

    let out = advise(&row(&[(Metric::DynamicLie, 2.0)]), None, &cfg);
    assert_eq!(out[0].category, Category::Lie);
    assert!(out[0].text.contains("toe up"));

    let out = advise(&row(&[(Metric::DynamicLie, -2.0)]), None, &cfg);
    assert!(out[0].text.contains("toe down"));

    assert!(advise(&row(&[(Metric::DynamicLie, 1.0)]), None, &cfg).is_empty());
}

#[test]
fn face_to_path_bias_suggests_grip_changes() {
    let cfg = AdvisorConfig::default();

    let out = advise(&row(&[(Metric::FaceToPath, 3.5)]), None, &cfg);
    assert_eq!(out[0].category, Category::Grip);
    assert!(out[0].text.contains("open to path"));

    let out = advise(&row(&[(Metric::FaceToPath, -3.5)]), None, &cfg);
    assert!(out[0].text.contains("closed to path"));

    assert!(advise(&row(&[(Metric::FaceToPath, 2.0)]), None, &cfg).is_empty());
}

#[test]
fn off_center_strike_names_the_side() {
    let cfg = AdvisorConfig::default();

    let out = advise(&row(&[(Metric::ImpactOffset, 0.5)]), None, &cfg);
    assert_eq!(out[0].category, Category::Strike);
    assert!(out[0].text.contains("toe"));

    let out = advise(&row(&[(Metric::ImpactOffset, -0.5)]), None, &cfg);
    assert!(out[0].text.contains("heel"));

    assert!(advise(&row(&[(Metric::ImpactOffset, 0.3)]), None, &cfg).is_empty());
}

#[test]
fn spin_gain_over_gamer_is_called_out() {
    let cfg = AdvisorConfig::default();
    let winner = row(&[(Metric::SpinRate, 6000.0)]);
    let gamer = row(&[(Metric::SpinRate, 5100.0)]);

    let out = advise(&winner, Some(&gamer), &cfg);
    assert_eq!(out.len(), 1);
    assert!(out[0].text.contains("900 rpm"));

    // Under the callout threshold stays quiet.
    let gamer = row(&[(Metric::SpinRate, 5300.0)]);
    assert!(advise(&winner, Some(&gamer), &cfg).is_empty());
}

#[test]
fn rules_with_missing_inputs_are_skipped_not_failed() {
    let cfg = AdvisorConfig::default();
    // Only one metric present; every other rule stays silent.
    let out = advise(&row(&[(Metric::SpinRate, 7000.0)]), None, &cfg);
    assert_eq!(out.len(), 1);
}
