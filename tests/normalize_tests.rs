use rstest::rstest;
use swingfit::normalize::{
    inverse_score, mean, percentile_ranks, ratio_score, round_to, std_dev, window_score, z_scores,
};

// --- WINDOW SCORE ---

#[rstest]
#[case(16.0, 1.0)] // at target
#[case(20.0, 0.0)] // at +tol
#[case(12.0, 0.0)] // at -tol
#[case(18.0, 0.5)] // halfway
#[case(30.0, 0.0)] // far past tol, clamped
fn window_score_shape(#[case] value: f64, #[case] expected: f64) {
    let got = window_score(Some(value), 16.0, 4.0);
    assert!((got - expected).abs() < 1e-9, "value {} -> {}", value, got);
}

#[test]
fn window_score_monotone_in_distance_from_target() {
    let mut last = window_score(Some(16.0), 16.0, 4.0);
    for step in 1..=10 {
        let v = 16.0 + step as f64 * 0.5;
        let s = window_score(Some(v), 16.0, 4.0);
        assert!(s <= last, "not non-increasing at {}", v);
        last = s;
    }
}

#[test]
fn window_score_no_information_cases() {
    assert_eq!(window_score(None, 16.0, 4.0), 0.0);
    assert_eq!(window_score(Some(16.0), 16.0, 0.0), 0.0);
    assert_eq!(window_score(Some(16.0), 16.0, -1.0), 0.0);
}

// --- RATIO / INVERSE ---

#[test]
fn ratio_score_clamps_and_degrades() {
    assert_eq!(ratio_score(Some(1.38), 1.38), 1.0);
    assert_eq!(ratio_score(Some(2.0), 1.38), 1.0);
    assert!((ratio_score(Some(0.69), 1.38) - 0.5).abs() < 1e-9);
    assert_eq!(ratio_score(None, 1.38), 0.0);
    assert_eq!(ratio_score(Some(1.0), 0.0), 0.0);
}

#[test]
fn inverse_score_zeroes_past_bad_threshold() {
    assert_eq!(inverse_score(Some(0.0), 4.0), 1.0);
    assert!((inverse_score(Some(2.0), 4.0) - 0.5).abs() < 1e-9);
    assert_eq!(inverse_score(Some(4.0), 4.0), 0.0);
    assert_eq!(inverse_score(Some(9.0), 4.0), 0.0);
    assert_eq!(inverse_score(None, 4.0), 0.0);
    assert_eq!(inverse_score(Some(1.0), 0.0), 0.0);
}

// --- Z-SCORES ---

#[test]
fn z_scores_zero_variance_is_all_neutral() {
    let col = vec![Some(5.0), Some(5.0), Some(5.0)];
    let z = z_scores(&col);
    assert!(z.iter().all(|&v| v == 0.0));
    assert!(z.iter().all(|v| v.is_finite()));
}

#[test]
fn z_scores_all_missing_is_all_neutral() {
    let col: Vec<Option<f64>> = vec![None, None];
    assert_eq!(z_scores(&col), vec![0.0, 0.0]);
}

#[test]
fn z_scores_missing_entries_stay_neutral() {
    let col = vec![Some(1.0), None, Some(3.0)];
    let z = z_scores(&col);
    assert!(z[0] < 0.0);
    assert_eq!(z[1], 0.0);
    assert!(z[2] > 0.0);
}

// --- PERCENTILE RANKS ---

#[test]
fn percentile_ranks_empty_and_missing_default_to_median() {
    assert!(percentile_ranks(&[]).is_empty());
    assert_eq!(percentile_ranks(&[None, None]), vec![0.5, 0.5]);
    assert_eq!(percentile_ranks(&[Some(7.0)]), vec![0.5]);
}

#[test]
fn percentile_ranks_ties_share_rank() {
    let ranks = percentile_ranks(&[Some(1.0), Some(1.0), Some(2.0)]);
    assert_eq!(ranks[0], ranks[1]);
    assert!(ranks[2] > ranks[0]);
}

#[test]
fn percentile_ranks_order_preserving() {
    let ranks = percentile_ranks(&[Some(10.0), Some(30.0), Some(20.0)]);
    assert!(ranks[0] < ranks[2]);
    assert!(ranks[2] < ranks[1]);
    assert!(ranks.iter().all(|r| (0.0..=1.0).contains(r)));
}

// --- HELPERS ---

#[test]
fn mean_and_std_dev_population() {
    assert_eq!(mean(&[]), None);
    assert_eq!(std_dev(&[]), None);
    assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    // Population SD (N denominator), not sample.
    assert!((std_dev(&[2.0, 4.0]).unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(std_dev(&[5.0]), Some(0.0));
}

#[test]
fn round_to_places() {
    assert_eq!(round_to(1.23456, 2), 1.23);
    assert_eq!(round_to(98.76543, 1), 98.8);
    assert_eq!(round_to(-1.114, 2), -1.11);
}
