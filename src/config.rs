use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FitError, FitResult};

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub scoring: ScoringConfig,
    #[command(flatten)]
    pub decision: DecisionConfig,
    #[command(flatten)]
    pub shortlist: ShortlistConfig,
    #[command(flatten)]
    pub advisor: AdvisorConfig,
}

/// Targets, tolerances, and weights for the efficiency and confidence
/// scores (per-shaft, baseline-independent).
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    // === EFFICIENCY TARGETS ===
    #[arg(long, default_value_t = 16.0)]
    pub launch_target: f64,
    #[arg(long, default_value_t = 4.0)]
    pub launch_tol: f64,
    #[arg(long, default_value_t = 5800.0)]
    pub spin_target: f64,
    #[arg(long, default_value_t = 1800.0)]
    pub spin_tol: f64,
    #[arg(long, default_value_t = 1.38)]
    pub smash_good: f64,

    // === DISPERSION "BAD" THRESHOLDS (score fully zeroed at/past) ===
    #[arg(long, default_value_t = 4.0)]
    pub bad_face_to_path_sd: f64,
    #[arg(long, default_value_t = 12.0)]
    pub bad_carry_sd: f64,

    // === EFFICIENCY WEIGHTS (sum to 1.0) ===
    #[arg(long, default_value_t = 0.28)]
    pub weight_launch: f64,
    #[arg(long, default_value_t = 0.28)]
    pub weight_spin: f64,
    #[arg(long, default_value_t = 0.22)]
    pub weight_smash: f64,
    #[arg(long, default_value_t = 0.22)]
    pub weight_dispersion: f64,
    /// Face-to-path share of the dispersion sub-score; carry SD gets the
    /// remainder.
    #[arg(long, default_value_t = 0.60)]
    pub dispersion_face_share: f64,

    // === CONFIDENCE ===
    #[arg(long, default_value_t = 8)]
    pub min_shots: usize,
    #[arg(long, default_value_t = 6.0)]
    pub shot_shortfall_penalty: f64,
    #[arg(long, default_value_t = 30.0)]
    pub shot_shortfall_cap: f64,
    #[arg(long, default_value_t = 4.0)]
    pub warn_face_to_path_sd: f64,
    #[arg(long, default_value_t = 12.0)]
    pub warn_carry_sd: f64,
    #[arg(long, default_value_t = 0.05)]
    pub warn_smash_sd: f64,
    #[arg(long, default_value_t = 18.0)]
    pub penalty_face_to_path_sd: f64,
    #[arg(long, default_value_t = 18.0)]
    pub penalty_carry_sd: f64,
    #[arg(long, default_value_t = 12.0)]
    pub penalty_smash_sd: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            launch_target: 16.0,
            launch_tol: 4.0,
            spin_target: 5800.0,
            spin_tol: 1800.0,
            smash_good: 1.38,
            bad_face_to_path_sd: 4.0,
            bad_carry_sd: 12.0,
            weight_launch: 0.28,
            weight_spin: 0.28,
            weight_smash: 0.22,
            weight_dispersion: 0.22,
            dispersion_face_share: 0.60,
            min_shots: 8,
            shot_shortfall_penalty: 6.0,
            shot_shortfall_cap: 30.0,
            warn_face_to_path_sd: 4.0,
            warn_carry_sd: 12.0,
            warn_smash_sd: 0.05,
            penalty_face_to_path_sd: 18.0,
            penalty_carry_sd: 18.0,
            penalty_smash_sd: 12.0,
        }
    }
}

/// Bands and blends for the goal-weighted decision engine.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Top-two overall gap at or under which the call is "too close".
    #[arg(long, default_value_t = 2.0)]
    pub too_close_band: f64,

    // === BEAT-THE-GAMER GUARDRAIL ===
    #[arg(long, default_value_t = 2.0)]
    pub beat_overall_margin: f64,
    /// Relative dispersion-score improvement that counts as a beat.
    #[arg(long, default_value_t = 0.10)]
    pub beat_dispersion_gain: f64,
    #[arg(long, default_value_t = 2.0)]
    pub beat_hold_margin: f64,

    /// Carry deltas under this many yards are jitter, not a tradeoff.
    #[arg(long, default_value_t = 2.0)]
    pub tradeoff_carry_yds: f64,

    // === DISPERSION SUB-SCORE Z-BLEND ===
    #[arg(long, default_value_t = 0.60)]
    pub dispersion_z_face: f64,
    #[arg(long, default_value_t = 0.40)]
    pub dispersion_z_carry: f64,

    // === HOLD SUB-SCORE Z-BLEND (landing / spin / peak height) ===
    // Indoor spin measurement is less reliable, so landing angle carries
    // more of the indoor blend.
    #[arg(long, default_value_t = 0.65)]
    pub hold_indoor_landing: f64,
    #[arg(long, default_value_t = 0.20)]
    pub hold_indoor_spin: f64,
    #[arg(long, default_value_t = 0.15)]
    pub hold_indoor_peak: f64,
    #[arg(long, default_value_t = 0.50)]
    pub hold_outdoor_landing: f64,
    #[arg(long, default_value_t = 0.35)]
    pub hold_outdoor_spin: f64,
    #[arg(long, default_value_t = 0.15)]
    pub hold_outdoor_peak: f64,

    // === FLIGHT-WINDOW SUB-SCORE Z-BLEND ===
    #[arg(long, default_value_t = 0.45)]
    pub flight_z_launch: f64,
    #[arg(long, default_value_t = 0.30)]
    pub flight_z_peak: f64,
    #[arg(long, default_value_t = 0.25)]
    pub flight_z_landing: f64,

    // === FEEL SUB-SCORE ===
    #[arg(long, default_value_t = 85.0)]
    pub feel_match_score: f64,
    #[arg(long, default_value_t = 55.0)]
    pub feel_partial_score: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            too_close_band: 2.0,
            beat_overall_margin: 2.0,
            beat_dispersion_gain: 0.10,
            beat_hold_margin: 2.0,
            tradeoff_carry_yds: 2.0,
            dispersion_z_face: 0.60,
            dispersion_z_carry: 0.40,
            hold_indoor_landing: 0.65,
            hold_indoor_spin: 0.20,
            hold_indoor_peak: 0.15,
            hold_outdoor_landing: 0.50,
            hold_outdoor_spin: 0.35,
            hold_outdoor_peak: 0.15,
            flight_z_launch: 0.45,
            flight_z_peak: 0.30,
            flight_z_landing: 0.25,
            feel_match_score: 85.0,
            feel_partial_score: 55.0,
        }
    }
}

/// Static-attribute pre-test ranking penalties.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortlistConfig {
    #[arg(long, default_value_t = 3)]
    pub take: usize,
    #[arg(long, default_value_t = 140.0)]
    pub flex_fit_cost: f64,
    #[arg(long, default_value_t = 6.0)]
    pub weight_fit_cost: f64,
    /// Hard penalty for too-soft shafts under a long-carry player.
    #[arg(long, default_value_t = 4000.0)]
    pub soft_flex_penalty: f64,
    #[arg(long, default_value_t = 6.5)]
    pub soft_flex_floor: f64,
    #[arg(long, default_value_t = 180.0)]
    pub soft_flex_carry: f64,
    /// Hard penalty for contradicting an explicit flight-direction request.
    #[arg(long, default_value_t = 10000.0)]
    pub flight_constraint_penalty: f64,
    #[arg(long, default_value_t = 250.0)]
    pub goal_bonus_scale: f64,
}

impl Default for ShortlistConfig {
    fn default() -> Self {
        Self {
            take: 3,
            flex_fit_cost: 140.0,
            weight_fit_cost: 6.0,
            soft_flex_penalty: 4000.0,
            soft_flex_floor: 6.5,
            soft_flex_carry: 180.0,
            flight_constraint_penalty: 10000.0,
            goal_bonus_scale: 250.0,
        }
    }
}

/// Numeric thresholds behind the rule-based advisors.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    #[arg(long, default_value_t = 5200.0)]
    pub spin_window_low: f64,
    #[arg(long, default_value_t = 6500.0)]
    pub spin_window_high: f64,
    #[arg(long, default_value_t = 12.0)]
    pub launch_window_low: f64,
    #[arg(long, default_value_t = 20.0)]
    pub launch_window_high: f64,
    #[arg(long, default_value_t = 45.0)]
    pub min_landing_angle: f64,
    #[arg(long, default_value_t = 1.5)]
    pub lie_neutral_band: f64,
    #[arg(long, default_value_t = 3.0)]
    pub face_to_path_band: f64,
    /// Inches off-center before a strike-location note fires.
    #[arg(long, default_value_t = 0.4)]
    pub impact_offset_band: f64,
    /// Spin gained vs the gamer worth calling out, in rpm.
    #[arg(long, default_value_t = 800.0)]
    pub spin_delta_note: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            spin_window_low: 5200.0,
            spin_window_high: 6500.0,
            launch_window_low: 12.0,
            launch_window_high: 20.0,
            min_landing_angle: 45.0,
            lie_neutral_band: 1.5,
            face_to_path_band: 3.0,
            impact_offset_band: 0.4,
            spin_delta_note: 800.0,
        }
    }
}

impl Config {
    /// Load a JSON profile. Missing fields fall back to the embedded
    /// defaults via `#[serde(default)]`, so partial overrides are fine.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FitResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(FitError::from)
    }

    /// Merge explicit CLI overrides onto `self`. A field is taken from
    /// `cli` only when the user actually passed its flag, so a JSON
    /// profile and CLI flags compose in the expected order.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(scoring, launch_target);
        update_if_present!(scoring, launch_tol);
        update_if_present!(scoring, spin_target);
        update_if_present!(scoring, spin_tol);
        update_if_present!(scoring, smash_good);
        update_if_present!(scoring, bad_face_to_path_sd);
        update_if_present!(scoring, bad_carry_sd);
        update_if_present!(scoring, weight_launch);
        update_if_present!(scoring, weight_spin);
        update_if_present!(scoring, weight_smash);
        update_if_present!(scoring, weight_dispersion);
        update_if_present!(scoring, dispersion_face_share);
        update_if_present!(scoring, min_shots);
        update_if_present!(scoring, shot_shortfall_penalty);
        update_if_present!(scoring, shot_shortfall_cap);
        update_if_present!(scoring, warn_face_to_path_sd);
        update_if_present!(scoring, warn_carry_sd);
        update_if_present!(scoring, warn_smash_sd);
        update_if_present!(scoring, penalty_face_to_path_sd);
        update_if_present!(scoring, penalty_carry_sd);
        update_if_present!(scoring, penalty_smash_sd);

        update_if_present!(decision, too_close_band);
        update_if_present!(decision, beat_overall_margin);
        update_if_present!(decision, beat_dispersion_gain);
        update_if_present!(decision, beat_hold_margin);
        update_if_present!(decision, tradeoff_carry_yds);
        update_if_present!(decision, dispersion_z_face);
        update_if_present!(decision, dispersion_z_carry);
        update_if_present!(decision, hold_indoor_landing);
        update_if_present!(decision, hold_indoor_spin);
        update_if_present!(decision, hold_indoor_peak);
        update_if_present!(decision, hold_outdoor_landing);
        update_if_present!(decision, hold_outdoor_spin);
        update_if_present!(decision, hold_outdoor_peak);
        update_if_present!(decision, flight_z_launch);
        update_if_present!(decision, flight_z_peak);
        update_if_present!(decision, flight_z_landing);
        update_if_present!(decision, feel_match_score);
        update_if_present!(decision, feel_partial_score);

        update_if_present!(shortlist, take);
        update_if_present!(shortlist, flex_fit_cost);
        update_if_present!(shortlist, weight_fit_cost);
        update_if_present!(shortlist, soft_flex_penalty);
        update_if_present!(shortlist, soft_flex_floor);
        update_if_present!(shortlist, soft_flex_carry);
        update_if_present!(shortlist, flight_constraint_penalty);
        update_if_present!(shortlist, goal_bonus_scale);

        update_if_present!(advisor, spin_window_low);
        update_if_present!(advisor, spin_window_high);
        update_if_present!(advisor, launch_window_low);
        update_if_present!(advisor, launch_window_high);
        update_if_present!(advisor, min_landing_angle);
        update_if_present!(advisor, lie_neutral_band);
        update_if_present!(advisor, face_to_path_band);
        update_if_present!(advisor, impact_offset_band);
        update_if_present!(advisor, spin_delta_note);
    }
}
