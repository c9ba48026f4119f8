use std::collections::BTreeMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use swingfit::catalog::Catalog;
use swingfit::config::Config;
use swingfit::profile::{Environment, GoalProfile, Objective, PreferencePair};
use swingfit::scoring::{build_comparison, decide};
use swingfit::telemetry::{Metric, MetricStat, SummaryRow};

fn synthetic_rows(n: usize) -> Vec<SummaryRow> {
    (0..n)
        .map(|i| {
            let f = i as f64;
            let mut stats = BTreeMap::new();
            stats.insert(Metric::Carry, MetricStat { mean: 230.0 + f * 2.5, std_dev: 3.0 + f * 0.4 });
            stats.insert(Metric::LaunchAngle, MetricStat { mean: 13.0 + f * 0.7, std_dev: 0.8 });
            stats.insert(Metric::SpinRate, MetricStat { mean: 5200.0 + f * 150.0, std_dev: 220.0 });
            stats.insert(Metric::SmashFactor, MetricStat { mean: 1.33 + f * 0.01, std_dev: 0.02 });
            stats.insert(Metric::FaceToPath, MetricStat { mean: 0.3, std_dev: 1.0 + f * 0.3 });
            stats.insert(Metric::LandingAngle, MetricStat { mean: 44.0 + f * 0.5, std_dev: 1.1 });
            stats.insert(Metric::PeakHeight, MetricStat { mean: 28.0 + f, std_dev: 1.6 });
            SummaryRow {
                shaft_id: format!("shaft-{}", i),
                shots: 10,
                stats,
            }
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let cfg = Config::default();
    let catalog = Catalog::default();
    let profile = GoalProfile {
        environment: Environment::Outdoor,
        objective: Objective::Balanced,
        flight: PreferencePair::default(),
        feel: PreferencePair::default(),
    };

    let rows = synthetic_rows(8);
    c.bench_function("build_comparison_8", |b| {
        b.iter(|| build_comparison(black_box(&rows), &catalog, Some("shaft-0"), &cfg.scoring))
    });

    let table = build_comparison(&rows, &catalog, Some("shaft-0"), &cfg.scoring);
    c.bench_function("decide_8", |b| {
        b.iter(|| decide(black_box(&table), &profile, &cfg.decision))
    });

    let rows = synthetic_rows(64);
    let table = build_comparison(&rows, &catalog, Some("shaft-0"), &cfg.scoring);
    c.bench_function("decide_64", |b| {
        b.iter(|| decide(black_box(&table), &profile, &cfg.decision))
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
