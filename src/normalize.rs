//! Scalar scoring primitives shared by every scoring stage.
//!
//! All functions here are total: missing inputs and degenerate sets map to a
//! defined neutral output, never NaN, infinity, or a panic.

/// Threshold below which a standard deviation is treated as zero.
const STDEV_EPSILON: f64 = 1e-9;

/// 1.0 at `target`, decaying linearly to 0.0 at `target ± tol`.
///
/// Returns 0.0 for a missing value or a non-positive tolerance.
pub fn window_score(value: Option<f64>, target: f64, tol: f64) -> f64 {
    let Some(v) = value else { return 0.0 };
    if tol <= 0.0 {
        return 0.0;
    }
    (1.0 - (v - target).abs() / tol).clamp(0.0, 1.0)
}

/// `value / good`, clamped to [0, 1]. 0.0 for missing value or `good <= 0`.
pub fn ratio_score(value: Option<f64>, good: f64) -> f64 {
    let Some(v) = value else { return 0.0 };
    if good <= 0.0 {
        return 0.0;
    }
    (v / good).clamp(0.0, 1.0)
}

/// Lower-is-better: `1 - value / bad`, clamped to [0, 1].
///
/// A value at or past `bad` fully zeroes the score. 0.0 for missing value
/// or `bad <= 0`.
pub fn inverse_score(value: Option<f64>, bad: f64) -> f64 {
    let Some(v) = value else { return 0.0 };
    if bad <= 0.0 {
        return 0.0;
    }
    (1.0 - v / bad).clamp(0.0, 1.0)
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (N denominator). `None` for an empty slice.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

/// Z-scores over a column with missing entries.
///
/// Missing entries, an all-missing column, or a zero-variance column all
/// produce 0.0 (neutral) at the affected positions.
pub fn z_scores(values: &[Option<f64>]) -> Vec<f64> {
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    let (m, sd) = match (mean(&present), std_dev(&present)) {
        (Some(m), Some(sd)) => (m, sd),
        _ => return vec![0.0; values.len()],
    };
    if sd < STDEV_EPSILON {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| match v {
            Some(v) => (v - m) / sd,
            None => 0.0,
        })
        .collect()
}

/// Percentile ranks in [0, 1] across a column; ties share the mean rank of
/// their positions. Missing entries rank at the neutral 0.5.
pub fn percentile_ranks(values: &[Option<f64>]) -> Vec<f64> {
    let n = values.iter().filter(|v| v.is_some()).count();
    if n == 0 {
        return vec![0.5; values.len()];
    }
    values
        .iter()
        .map(|v| {
            let Some(v) = v else { return 0.5 };
            let mut below = 0usize;
            let mut tied = 0usize;
            for other in values.iter().flatten() {
                if other < v {
                    below += 1;
                } else if (other - v).abs() < STDEV_EPSILON {
                    tied += 1;
                }
            }
            // Mean 1-based rank of the tie group, shifted to the (0, 1) open
            // interval so a lone value ranks at 0.5.
            let avg_rank = below as f64 + (tied as f64 + 1.0) / 2.0;
            (avg_rank - 0.5) / n as f64
        })
        .collect()
}

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let f = 10f64.powi(places as i32);
    (value * f).round() / f
}
