//! Per-shaft absolute quality and data-quality scoring, plus the
//! comparison table every later stage consumes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::ScoringConfig;
use crate::normalize::{inverse_score, ratio_score, round_to, window_score};
use crate::telemetry::{Metric, SummaryRow};

/// One comparison-table row: a summary row joined with its catalog entry,
/// scored and positioned relative to the baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub shaft_id: String,
    pub shaft_label: String,
    pub shots: usize,
    /// Absolute quality, 0-100, one decimal.
    pub efficiency: f64,
    /// Data-quality soft filter, 0-100. Annotates, never removes.
    pub confidence: f64,
    pub carry_delta: Option<f64>,
    pub launch_delta: Option<f64>,
    pub spin_delta: Option<f64>,
    /// Display dispersion: face-to-path SD when nonzero, else carry SD.
    pub dispersion: Option<f64>,
    pub feel_tags: Vec<String>,
    pub is_baseline: bool,
    pub summary: SummaryRow,
}

/// Weighted window/ratio/inverse blend over launch, spin, smash, and
/// dispersion. Missing metrics contribute 0 to their component.
pub fn efficiency_score(row: &SummaryRow, cfg: &ScoringConfig) -> f64 {
    let launch = window_score(row.mean(Metric::LaunchAngle), cfg.launch_target, cfg.launch_tol);
    let spin = window_score(row.mean(Metric::SpinRate), cfg.spin_target, cfg.spin_tol);
    let smash = ratio_score(row.mean(Metric::SmashFactor), cfg.smash_good);

    let face_sd = inverse_score(row.sd(Metric::FaceToPath), cfg.bad_face_to_path_sd);
    let carry_sd = inverse_score(row.sd(Metric::Carry), cfg.bad_carry_sd);
    let dispersion =
        cfg.dispersion_face_share * face_sd + (1.0 - cfg.dispersion_face_share) * carry_sd;

    let score = cfg.weight_launch * launch
        + cfg.weight_spin * spin
        + cfg.weight_smash * smash
        + cfg.weight_dispersion * dispersion;

    round_to(score * 100.0, 1)
}

/// Starts at 100 and bleeds points for thin shot counts and noisy
/// variance flags. Clamped to [0, 100].
pub fn confidence_score(row: &SummaryRow, cfg: &ScoringConfig) -> f64 {
    let mut score = 100.0;

    if row.shots < cfg.min_shots {
        let shortfall = (cfg.min_shots - row.shots) as f64;
        score -= (cfg.shot_shortfall_penalty * shortfall).min(cfg.shot_shortfall_cap);
    }

    if matches!(row.sd(Metric::FaceToPath), Some(sd) if sd > cfg.warn_face_to_path_sd) {
        score -= cfg.penalty_face_to_path_sd;
    }
    if matches!(row.sd(Metric::Carry), Some(sd) if sd > cfg.warn_carry_sd) {
        score -= cfg.penalty_carry_sd;
    }
    if matches!(row.sd(Metric::SmashFactor), Some(sd) if sd > cfg.warn_smash_sd) {
        score -= cfg.penalty_smash_sd;
    }

    score.clamp(0.0, 100.0)
}

fn delta(row: Option<f64>, base: Option<f64>) -> Option<f64> {
    match (row, base) {
        (Some(r), Some(b)) => Some(round_to(r - b, 2)),
        _ => None,
    }
}

/// Build the comparison table: score every summary row, compute
/// baseline-relative deltas, and sort descending by (efficiency,
/// confidence).
///
/// An unresolvable baseline degrades deltas to `None` rather than failing;
/// an empty row set returns an empty table.
pub fn build_comparison(
    rows: &[SummaryRow],
    catalog: &Catalog,
    baseline_id: Option<&str>,
    cfg: &ScoringConfig,
) -> Vec<ComparisonRow> {
    if rows.is_empty() {
        return Vec::new();
    }

    // Most recent row wins when the baseline was retested.
    let baseline = baseline_id.and_then(|id| rows.iter().rev().find(|r| r.shaft_id == id));
    if baseline_id.is_some() && baseline.is_none() {
        debug!(
            "baseline '{}' not present in summary rows; deltas stay neutral",
            baseline_id.unwrap_or_default()
        );
    }

    let mut table: Vec<ComparisonRow> = rows
        .iter()
        .map(|row| {
            let base = baseline;
            let dispersion = match row.sd(Metric::FaceToPath) {
                Some(sd) if sd > 0.0 => Some(sd),
                _ => row.sd(Metric::Carry),
            };
            ComparisonRow {
                shaft_id: row.shaft_id.clone(),
                shaft_label: catalog.label_for(&row.shaft_id),
                shots: row.shots,
                efficiency: efficiency_score(row, cfg),
                confidence: confidence_score(row, cfg),
                carry_delta: delta(
                    row.mean(Metric::Carry),
                    base.and_then(|b| b.mean(Metric::Carry)),
                ),
                launch_delta: delta(
                    row.mean(Metric::LaunchAngle),
                    base.and_then(|b| b.mean(Metric::LaunchAngle)),
                ),
                spin_delta: delta(
                    row.mean(Metric::SpinRate),
                    base.and_then(|b| b.mean(Metric::SpinRate)),
                ),
                dispersion,
                feel_tags: catalog
                    .get(&row.shaft_id)
                    .map(|s| s.feel_tags())
                    .unwrap_or_default(),
                is_baseline: baseline_id == Some(row.shaft_id.as_str()),
                summary: row.clone(),
            }
        })
        .collect();

    table.sort_by(|a, b| {
        b.efficiency
            .total_cmp(&a.efficiency)
            .then(b.confidence.total_cmp(&a.confidence))
    });

    table
}
