//! Rule-based advisors: independent, stateless rule chains over a winning
//! summary row (and optionally the gamer's row). Each rule inspects only
//! the fields it needs; an absent field skips that rule, never the batch.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::AdvisorConfig;
use crate::telemetry::{Metric, SummaryRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Info,
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Loft,
    Head,
    Lie,
    Grip,
    Strike,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advisory {
    pub category: Category,
    pub severity: Severity,
    pub text: String,
}

impl Advisory {
    fn info(category: Category, text: String) -> Self {
        Self {
            category,
            severity: Severity::Info,
            text,
        }
    }

    fn warn(category: Category, text: String) -> Self {
        Self {
            category,
            severity: Severity::Warn,
            text,
        }
    }
}

fn loft_rules(row: &SummaryRow, cfg: &AdvisorConfig, out: &mut Vec<Advisory>) {
    if let Some(spin) = row.mean(Metric::SpinRate) {
        if spin < cfg.spin_window_low {
            out.push(Advisory::info(
                Category::Loft,
                format!(
                    "Spin averaged {:.0} rpm, under the {:.0}-{:.0} window; consider adding \
                     loft or a higher-spinning head.",
                    spin, cfg.spin_window_low, cfg.spin_window_high
                ),
            ));
        } else if spin > cfg.spin_window_high {
            out.push(Advisory::info(
                Category::Loft,
                format!(
                    "Spin averaged {:.0} rpm, above the {:.0}-{:.0} window; consider reducing \
                     loft or a lower-spin head.",
                    spin, cfg.spin_window_low, cfg.spin_window_high
                ),
            ));
        }
    }
}

fn head_rules(row: &SummaryRow, cfg: &AdvisorConfig, out: &mut Vec<Advisory>) {
    if let Some(launch) = row.mean(Metric::LaunchAngle) {
        if launch < cfg.launch_window_low {
            out.push(Advisory::info(
                Category::Head,
                format!(
                    "Launch averaged {:.1}°; a head with more launch assistance would help.",
                    launch
                ),
            ));
        } else if launch > cfg.launch_window_high {
            out.push(Advisory::info(
                Category::Head,
                format!(
                    "Launch averaged {:.1}°; a lower-launching head would tighten the window.",
                    launch
                ),
            ));
        }
    }
    if let Some(landing) = row.mean(Metric::LandingAngle) {
        if landing < cfg.min_landing_angle {
            out.push(Advisory::warn(
                Category::Head,
                format!(
                    "Landing angle averaged {:.1}°, under the {:.0}° minimum for holding \
                     greens; more spin or peak height is needed.",
                    landing, cfg.min_landing_angle
                ),
            ));
        }
    }
}

fn lie_rules(row: &SummaryRow, cfg: &AdvisorConfig, out: &mut Vec<Advisory>) {
    if let Some(lie) = row.mean(Metric::DynamicLie) {
        if lie > cfg.lie_neutral_band {
            out.push(Advisory::info(
                Category::Lie,
                format!(
                    "Dynamic lie averaged {:+.1}° (toe up); flattening the lie angle would \
                     square the face at impact.",
                    lie
                ),
            ));
        } else if lie < -cfg.lie_neutral_band {
            out.push(Advisory::info(
                Category::Lie,
                format!(
                    "Dynamic lie averaged {:+.1}° (toe down); a more upright lie angle would \
                     square the face at impact.",
                    lie
                ),
            ));
        }
    }
}

fn grip_rules(row: &SummaryRow, cfg: &AdvisorConfig, out: &mut Vec<Advisory>) {
    if let Some(f2p) = row.mean(Metric::FaceToPath) {
        if f2p > cfg.face_to_path_band {
            out.push(Advisory::info(
                Category::Grip,
                format!(
                    "Face sat {:+.1}° open to path on average; a slightly smaller grip can \
                     free up the release.",
                    f2p
                ),
            ));
        } else if f2p < -cfg.face_to_path_band {
            out.push(Advisory::info(
                Category::Grip,
                format!(
                    "Face sat {:+.1}° closed to path on average; a slightly larger grip can \
                     quiet the hands.",
                    f2p
                ),
            ));
        }
    }
}

fn strike_rules(row: &SummaryRow, cfg: &AdvisorConfig, out: &mut Vec<Advisory>) {
    if let Some(offset) = row.mean(Metric::ImpactOffset) {
        if offset.abs() > cfg.impact_offset_band {
            let side = if offset > 0.0 { "toe" } else { "heel" };
            out.push(Advisory::info(
                Category::Strike,
                format!(
                    "Strike averaged {:.2}\" toward the {}; results may shift once strike \
                     centers up.",
                    offset.abs(),
                    side
                ),
            ));
        }
    }
}

fn baseline_rules(
    row: &SummaryRow,
    baseline: &SummaryRow,
    cfg: &AdvisorConfig,
    out: &mut Vec<Advisory>,
) {
    if let (Some(spin), Some(base_spin)) =
        (row.mean(Metric::SpinRate), baseline.mean(Metric::SpinRate))
    {
        if spin - base_spin > cfg.spin_delta_note {
            out.push(Advisory::info(
                Category::Loft,
                format!(
                    "This shaft adds {:.0} rpm of spin over the gamer; watch ball flight in \
                     wind.",
                    spin - base_spin
                ),
            ));
        }
    }
}

/// Run every advisor over the winning row. Rules whose inputs are missing
/// emit nothing; the batch itself cannot fail.
pub fn advise(
    winner: &SummaryRow,
    baseline: Option<&SummaryRow>,
    cfg: &AdvisorConfig,
) -> Vec<Advisory> {
    let mut out = Vec::new();
    loft_rules(winner, cfg, &mut out);
    head_rules(winner, cfg, &mut out);
    lie_rules(winner, cfg, &mut out);
    grip_rules(winner, cfg, &mut out);
    strike_rules(winner, cfg, &mut out);
    if let Some(base) = baseline {
        baseline_rules(winner, base, cfg, &mut out);
    }
    out
}
