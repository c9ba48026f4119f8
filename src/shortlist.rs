//! Pre-test shortlist: ranks the full catalog on static attributes alone,
//! before any launch-monitor data exists, to pick which shafts to put in
//! a test club.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::ShortlistConfig;
use crate::normalize::percentile_ranks;
use crate::profile::{GoalProfile, Objective};

/// Target flex/weight step table keyed by declared carry distance.
/// (carry floor, flex target, weight target in grams)
const FIT_STEPS: &[(f64, f64, f64)] = &[
    (195.0, 8.5, 130.0),
    (180.0, 7.0, 125.0),
    (165.0, 6.0, 110.0),
];
const FIT_DEFAULT: (f64, f64) = (5.0, 95.0);

fn fit_targets(carry: f64) -> (f64, f64) {
    for &(floor, flex, weight) in FIT_STEPS {
        if carry >= floor {
            return (flex, weight);
        }
    }
    FIT_DEFAULT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub shaft_id: String,
    pub shaft_label: String,
    pub flex_score: f64,
    pub weight_g: f64,
    /// Lower is better.
    pub penalty: f64,
}

/// Rank the catalog for a player profile. Lower penalty is better; the
/// caller-facing result is already sorted ascending, trimmed to the
/// configured test-set size, and excludes the current gamer.
///
/// An empty catalog (or one whose rows carried no stable ids) yields an
/// empty shortlist.
pub fn shortlist(
    catalog: &Catalog,
    profile: &GoalProfile,
    declared_carry: Option<f64>,
    baseline_id: Option<&str>,
    cfg: &ShortlistConfig,
) -> Vec<ShortlistEntry> {
    if catalog.is_empty() {
        return Vec::new();
    }

    let carry = declared_carry.unwrap_or(0.0);
    let (flex_target, weight_target) = fit_targets(carry);

    let launch_ranks = percentile_ranks(
        &catalog.shafts.iter().map(|s| Some(s.launch_score)).collect::<Vec<_>>(),
    );
    let stability_ranks = percentile_ranks(
        &catalog.shafts.iter().map(|s| Some(s.stability)).collect::<Vec<_>>(),
    );

    // The hard flight constraint honors any named direction the player
    // has not explicitly walked back.
    let flight_constrained = profile.flight.direction_requested();
    let wants_lower = profile.flight.wants_lower();

    let mut entries: Vec<ShortlistEntry> = catalog
        .shafts
        .iter()
        .enumerate()
        .map(|(i, shaft)| {
            let mut penalty = (shaft.flex_score - flex_target).abs() * cfg.flex_fit_cost
                + (shaft.weight_g - weight_target).abs() * cfg.weight_fit_cost;

            // Implausibly soft under a long-carry player, regardless of
            // goal bonuses.
            if carry >= cfg.soft_flex_carry && shaft.flex_score < cfg.soft_flex_floor {
                penalty += cfg.soft_flex_penalty;
            }

            let bonus = match profile.objective {
                Objective::MoreDistance => launch_ranks[i],
                Objective::Straighter => stability_ranks[i],
                Objective::HoldGreens => 0.5 * launch_ranks[i] + 0.5 * stability_ranks[i],
                Objective::BeatGamer | Objective::Balanced | Objective::FlightWindow => {
                    0.35 * launch_ranks[i] + 0.35 * stability_ranks[i]
                }
            };
            penalty -= bonus * cfg.goal_bonus_scale;

            if flight_constrained {
                let wrong_half = if wants_lower {
                    launch_ranks[i] >= 0.5
                } else {
                    launch_ranks[i] < 0.5
                };
                if wrong_half {
                    penalty += cfg.flight_constraint_penalty;
                }
            }

            ShortlistEntry {
                shaft_id: shaft.id.clone(),
                shaft_label: shaft.label(),
                flex_score: shaft.flex_score,
                weight_g: shaft.weight_g,
                penalty,
            }
        })
        .filter(|e| Some(e.shaft_id.as_str()) != baseline_id)
        .collect();

    entries.sort_by(|a, b| a.penalty.total_cmp(&b.penalty).then(a.shaft_id.cmp(&b.shaft_id)));
    entries.truncate(cfg.take);

    debug!(
        "shortlist of {} from {} catalog entries (carry {:.0}, flex target {:.1})",
        entries.len(),
        catalog.shafts.len(),
        carry,
        flex_target
    );

    entries
}
