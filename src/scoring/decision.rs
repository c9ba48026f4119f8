//! Goal-weighted decision engine: comparison-set-relative sub-scores,
//! goal-conditioned aggregation, winner selection, near-tie detection, and
//! the beat-the-gamer guardrail.
//!
//! Every sub-score is a percentile rank of a composite z-score, so the
//! engine is insensitive to the absolute scales of the raw telemetry.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use tracing::debug;

use super::efficiency::ComparisonRow;
use super::weights::GoalWeights;
use crate::config::DecisionConfig;
use crate::normalize::{percentile_ranks, round_to, z_scores};
use crate::profile::{Environment, GoalProfile, Objective};
use crate::telemetry::Metric;

pub const NEUTRAL_SCORE: f64 = 50.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum Dimension {
    Overall,
    Efficiency,
    Dispersion,
    Distance,
    Hold,
    Flight,
    Feel,
}

/// Per-shaft decision record. All sub-scores are always present (neutral
/// defaults when the data can't inform them) so the record is directly
/// serializable for display or PDF layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub shaft_id: String,
    pub shaft_label: String,
    pub overall: f64,
    pub efficiency: f64,
    pub dispersion: f64,
    pub distance: f64,
    pub hold: f64,
    pub flight: f64,
    pub feel: f64,
    pub confidence: f64,
    pub carry_delta: Option<f64>,
    pub is_baseline: bool,
    /// Human-readable tradeoff and reason sentences.
    pub notes: Vec<String>,
}

impl ScoreRecord {
    pub fn dimension(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Overall => self.overall,
            Dimension::Efficiency => self.efficiency,
            Dimension::Dispersion => self.dispersion,
            Dimension::Distance => self.distance,
            Dimension::Hold => self.hold,
            Dimension::Flight => self.flight,
            Dimension::Feel => self.feel,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamerCheck {
    pub beats: bool,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionReport {
    /// Sorted descending by (overall, confidence).
    pub matrix: Vec<ScoreRecord>,
    /// Never the baseline while a non-baseline candidate exists.
    pub highlighted: Option<String>,
    pub highlight_note: Option<String>,
    pub too_close: bool,
    pub too_close_note: Option<String>,
    /// Winner shaft id per scoring dimension, ties broken by confidence.
    pub winners: Vec<(Dimension, String)>,
    /// Present only when the objective is beat-my-gamer and the baseline
    /// resolved.
    pub gamer_check: Option<GamerCheck>,
}

/// Tolerance for "exceeds by exactly the threshold" comparisons.
const MARGIN_EPSILON: f64 = 1e-9;

fn rank_scores(composites: &[Option<f64>]) -> Vec<f64> {
    percentile_ranks(composites)
        .into_iter()
        .map(|r| round_to(r * 100.0, 1))
        .collect()
}

fn distance_scores(rows: &[ComparisonRow], baseline_resolved: bool) -> Vec<f64> {
    // Baseline-relative deltas when a zero-point exists, raw carry
    // otherwise.
    let col: Vec<Option<f64>> = if baseline_resolved {
        rows.iter().map(|r| r.carry_delta).collect()
    } else {
        rows.iter().map(|r| r.summary.mean(Metric::Carry)).collect()
    };
    rank_scores(&col)
}

fn dispersion_scores(rows: &[ComparisonRow], cfg: &DecisionConfig) -> Vec<f64> {
    let z_face = z_scores(&rows.iter().map(|r| r.summary.sd(Metric::FaceToPath)).collect::<Vec<_>>());
    let z_carry = z_scores(&rows.iter().map(|r| r.summary.sd(Metric::Carry)).collect::<Vec<_>>());
    let composite: Vec<Option<f64>> = z_face
        .iter()
        .zip(&z_carry)
        .map(|(f, c)| Some(-cfg.dispersion_z_face * f - cfg.dispersion_z_carry * c))
        .collect();
    rank_scores(&composite)
}

fn hold_scores(rows: &[ComparisonRow], env: Environment, cfg: &DecisionConfig) -> Vec<f64> {
    let (w_landing, w_spin, w_peak) = match env {
        Environment::Indoor => (cfg.hold_indoor_landing, cfg.hold_indoor_spin, cfg.hold_indoor_peak),
        Environment::Outdoor => (
            cfg.hold_outdoor_landing,
            cfg.hold_outdoor_spin,
            cfg.hold_outdoor_peak,
        ),
    };
    let z_landing = z_scores(&rows.iter().map(|r| r.summary.mean(Metric::LandingAngle)).collect::<Vec<_>>());
    let z_spin = z_scores(&rows.iter().map(|r| r.summary.mean(Metric::SpinRate)).collect::<Vec<_>>());
    let z_peak = z_scores(&rows.iter().map(|r| r.summary.mean(Metric::PeakHeight)).collect::<Vec<_>>());
    let composite: Vec<Option<f64>> = (0..rows.len())
        .map(|i| Some(w_landing * z_landing[i] + w_spin * z_spin[i] + w_peak * z_peak[i]))
        .collect();
    rank_scores(&composite)
}

fn flight_scores(rows: &[ComparisonRow], profile: &GoalProfile, cfg: &DecisionConfig) -> Vec<f64> {
    if !profile.flight.change_wanted() {
        return vec![NEUTRAL_SCORE; rows.len()];
    }
    let direction = if profile.flight.wants_lower() { -1.0 } else { 1.0 };
    let z_launch = z_scores(&rows.iter().map(|r| r.summary.mean(Metric::LaunchAngle)).collect::<Vec<_>>());
    let z_peak = z_scores(&rows.iter().map(|r| r.summary.mean(Metric::PeakHeight)).collect::<Vec<_>>());
    let z_landing = z_scores(&rows.iter().map(|r| r.summary.mean(Metric::LandingAngle)).collect::<Vec<_>>());
    let composite: Vec<Option<f64>> = (0..rows.len())
        .map(|i| {
            Some(
                direction
                    * (cfg.flight_z_launch * z_launch[i]
                        + cfg.flight_z_peak * z_peak[i]
                        + cfg.flight_z_landing * z_landing[i]),
            )
        })
        .collect();
    rank_scores(&composite)
}

const FEEL_GROUPS: &[&[&str]] = &[
    &["smooth", "soft", "buttery", "active"],
    &["stable", "stout", "boardy", "firm", "stiff"],
    &["lively", "responsive", "springy", "bright"],
];

fn feel_group(word: &str) -> Option<usize> {
    FEEL_GROUPS.iter().position(|g| g.contains(&word))
}

fn feel_scores(rows: &[ComparisonRow], profile: &GoalProfile, cfg: &DecisionConfig) -> Vec<f64> {
    if !profile.feel.change_wanted() {
        return vec![NEUTRAL_SCORE; rows.len()];
    }
    // Substring match tolerates comparative forms ("smoother", "more
    // stable").
    let target = profile.feel.target.as_deref().map(|t| t.to_lowercase());
    let target_group = target
        .as_deref()
        .and_then(|t| FEEL_GROUPS.iter().position(|g| g.iter().any(|w| t.contains(w))));

    rows.iter()
        .map(|r| {
            if r.feel_tags.is_empty() {
                return NEUTRAL_SCORE;
            }
            let matched = target_group.is_some_and(|tg| {
                r.feel_tags.iter().any(|tag| feel_group(tag) == Some(tg))
            });
            if matched {
                cfg.feel_match_score
            } else {
                cfg.feel_partial_score
            }
        })
        .collect()
}

fn pick_winner(matrix: &[ScoreRecord], dim: Dimension) -> Option<String> {
    matrix
        .iter()
        .max_by(|a, b| {
            a.dimension(dim)
                .total_cmp(&b.dimension(dim))
                .then(a.confidence.total_cmp(&b.confidence))
        })
        .map(|r| r.shaft_id.clone())
}

fn fmt_delta(delta: Option<f64>) -> String {
    match delta {
        Some(d) => format!("{:+.1} yd", d),
        None => "n/a".to_string(),
    }
}

fn tradeoff_note(carry_delta: f64) -> String {
    // Nearest half yard; sub-band deltas never reach here.
    let rounded = (carry_delta * 2.0).round() / 2.0;
    if rounded >= 0.0 {
        format!("Gains {:.1} yd of carry over the gamer.", rounded)
    } else {
        format!("Gives up {:.1} yd of carry vs the gamer.", rounded.abs())
    }
}

/// Run the full decision pass over a comparison table.
///
/// An empty table produces an empty report (`matrix: [], highlighted:
/// None, too_close: false`) rather than an error.
pub fn decide(
    comparison: &[ComparisonRow],
    profile: &GoalProfile,
    cfg: &DecisionConfig,
) -> DecisionReport {
    if comparison.is_empty() {
        return DecisionReport::default();
    }

    let baseline_resolved = comparison.iter().any(|r| r.is_baseline);
    let weights = GoalWeights::for_objective(profile.objective);

    let distance = distance_scores(comparison, baseline_resolved);
    let dispersion = dispersion_scores(comparison, cfg);
    let hold = hold_scores(comparison, profile.environment, cfg);
    let flight = flight_scores(comparison, profile, cfg);
    let feel = feel_scores(comparison, profile, cfg);

    let mut matrix: Vec<ScoreRecord> = comparison
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let overall = round_to(
                weights.efficiency * row.efficiency
                    + weights.dispersion * dispersion[i]
                    + weights.distance * distance[i]
                    + weights.hold * hold[i]
                    + weights.flight * flight[i]
                    + weights.feel * feel[i],
                1,
            );
            let mut notes = Vec::new();
            if let Some(d) = row.carry_delta {
                if d.abs() >= cfg.tradeoff_carry_yds {
                    notes.push(tradeoff_note(d));
                }
            }
            ScoreRecord {
                shaft_id: row.shaft_id.clone(),
                shaft_label: row.shaft_label.clone(),
                overall,
                efficiency: row.efficiency,
                dispersion: dispersion[i],
                distance: distance[i],
                hold: hold[i],
                flight: flight[i],
                feel: feel[i],
                confidence: row.confidence,
                carry_delta: row.carry_delta,
                is_baseline: row.is_baseline,
                notes,
            }
        })
        .collect();

    matrix.sort_by(|a, b| {
        b.overall
            .total_cmp(&a.overall)
            .then(b.confidence.total_cmp(&a.confidence))
    });

    let winners: Vec<(Dimension, String)> = [
        Dimension::Overall,
        Dimension::Efficiency,
        Dimension::Dispersion,
        Dimension::Distance,
        Dimension::Hold,
        Dimension::Flight,
        Dimension::Feel,
    ]
    .into_iter()
    .filter_map(|dim| pick_winner(&matrix, dim).map(|id| (dim, id)))
    .collect();

    // Near-tie detection over the sorted matrix.
    let (too_close, too_close_note) = if matrix.len() >= 2
        && (matrix[0].overall - matrix[1].overall) <= cfg.too_close_band + MARGIN_EPSILON
    {
        let note = format!(
            "Too close to call: {} (carry {}, dispersion {:.1}) vs {} (carry {}, dispersion {:.1}).",
            matrix[0].shaft_label,
            fmt_delta(matrix[0].carry_delta),
            matrix[0].dispersion,
            matrix[1].shaft_label,
            fmt_delta(matrix[1].carry_delta),
            matrix[1].dispersion,
        );
        (true, Some(note))
    } else {
        (false, None)
    };

    // The highlight is the overall winner, unless that winner is the
    // gamer itself and an alternative exists.
    let top = &matrix[0];
    let (highlighted, highlight_note) = if top.is_baseline {
        match matrix.iter().find(|r| !r.is_baseline) {
            Some(alt) => (
                Some(alt.shaft_id.clone()),
                Some(format!(
                    "Your current shaft tested best overall; {} is the strongest alternative.",
                    alt.shaft_label
                )),
            ),
            None => (Some(top.shaft_id.clone()), None),
        }
    } else {
        (Some(top.shaft_id.clone()), None)
    };

    let gamer_check = if profile.objective == Objective::BeatGamer && baseline_resolved {
        build_gamer_check(&matrix, cfg)
    } else {
        None
    };

    debug!(
        "decision over {} candidates, objective {}, highlighted {:?}",
        matrix.len(),
        profile.objective,
        highlighted
    );

    DecisionReport {
        matrix,
        highlighted,
        highlight_note,
        too_close,
        too_close_note,
        winners,
        gamer_check,
    }
}

/// Never claim an upgrade the data doesn't support: the best alternative
/// must clear at least one explicit margin over the gamer, otherwise the
/// report carries a "no clear upgrade" message.
fn build_gamer_check(matrix: &[ScoreRecord], cfg: &DecisionConfig) -> Option<GamerCheck> {
    let base = matrix.iter().find(|r| r.is_baseline)?;
    let alt = matrix.iter().find(|r| !r.is_baseline)?;

    let overall_beat = alt.overall - base.overall >= cfg.beat_overall_margin - MARGIN_EPSILON;
    let dispersion_beat = base.dispersion > 0.0
        && (alt.dispersion - base.dispersion) / base.dispersion
            >= cfg.beat_dispersion_gain - MARGIN_EPSILON;
    let hold_beat = alt.hold - base.hold >= cfg.beat_hold_margin - MARGIN_EPSILON;

    let beats = overall_beat || dispersion_beat || hold_beat;
    let note = if beats {
        None
    } else {
        Some(format!(
            "No clear upgrade over your gamer: {} is the best alternative but doesn't \
             separate on overall score, dispersion, or hold.",
            alt.shaft_label
        ))
    };
    Some(GamerCheck { beats, note })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, overall: f64, dispersion: f64, hold: f64, is_baseline: bool) -> ScoreRecord {
        ScoreRecord {
            shaft_id: id.to_string(),
            shaft_label: id.to_string(),
            overall,
            efficiency: 50.0,
            dispersion,
            distance: 50.0,
            hold,
            flight: 50.0,
            feel: 50.0,
            confidence: 100.0,
            carry_delta: None,
            is_baseline,
            notes: Vec::new(),
        }
    }

    #[test]
    fn gamer_check_beats_at_exact_overall_margin() {
        let cfg = DecisionConfig::default();
        let matrix = vec![
            record("alt", 62.0, 50.0, 50.0, false),
            record("gamer", 60.0, 50.0, 50.0, true),
        ];
        let check = build_gamer_check(&matrix, &cfg).unwrap();
        assert!(check.beats);
        assert!(check.note.is_none());
    }

    #[test]
    fn gamer_check_flags_no_upgrade_just_under_margin() {
        let cfg = DecisionConfig::default();
        let matrix = vec![
            record("alt", 61.99, 50.0, 50.0, false),
            record("gamer", 60.0, 50.0, 50.0, true),
        ];
        let check = build_gamer_check(&matrix, &cfg).unwrap();
        assert!(!check.beats);
        assert!(check.note.unwrap().contains("No clear upgrade"));
    }

    #[test]
    fn gamer_check_accepts_relative_dispersion_gain() {
        let cfg = DecisionConfig::default();
        let matrix = vec![
            record("alt", 60.5, 55.0, 50.0, false),
            record("gamer", 60.0, 50.0, 50.0, true),
        ];
        // 55 vs 50 is a 10% relative improvement, the second escape hatch.
        let check = build_gamer_check(&matrix, &cfg).unwrap();
        assert!(check.beats);
    }

    #[test]
    fn gamer_check_accepts_hold_margin() {
        let cfg = DecisionConfig::default();
        let matrix = vec![
            record("alt", 60.0, 50.0, 52.0, false),
            record("gamer", 60.0, 50.0, 50.0, true),
        ];
        let check = build_gamer_check(&matrix, &cfg).unwrap();
        assert!(check.beats);
    }

    #[test]
    fn tradeoff_note_rounds_to_half_yards() {
        assert_eq!(tradeoff_note(3.3), "Gains 3.5 yd of carry over the gamer.");
        assert_eq!(tradeoff_note(-2.2), "Gives up 2.0 yd of carry vs the gamer.");
    }
}
