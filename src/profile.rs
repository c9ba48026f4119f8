//! Goal Profile resolution: the single seam where the free-form interview
//! answer map is folded into a typed struct. Everything downstream consumes
//! [`GoalProfile`], never the raw map, and resolution itself never fails —
//! unrecognized or missing fields fall back to neutral defaults.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum Environment {
    Indoor,
    #[default]
    Outdoor,
}

/// Primary performance objective, a closed enumeration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Objective {
    #[strum(serialize = "more_distance", serialize = "more distance", serialize = "distance")]
    MoreDistance,
    #[strum(serialize = "straighter", serialize = "accuracy", serialize = "tighter dispersion")]
    Straighter,
    #[strum(serialize = "hold_greens", serialize = "hold greens", serialize = "hold greens better")]
    HoldGreens,
    #[strum(serialize = "flight_window", serialize = "flight window", serialize = "trajectory")]
    FlightWindow,
    #[strum(serialize = "beat_gamer", serialize = "beat my gamer")]
    BeatGamer,
    #[default]
    #[strum(serialize = "balanced", serialize = "other")]
    Balanced,
}

/// "Happy with current X / desired direction" answer pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencePair {
    /// `Some(true)` only for an explicit yes; `Some(false)` for an explicit
    /// no or unsure; `None` when the question was not answered.
    pub happy: Option<bool>,
    pub target: Option<String>,
}

impl PreferencePair {
    /// A change is wanted only when the player explicitly said no/unsure
    /// AND named a direction.
    pub fn change_wanted(&self) -> bool {
        matches!(self.happy, Some(false)) && self.target.is_some()
    }

    /// A named direction stands unless the player explicitly said they
    /// are happy. Weaker than [`change_wanted`](Self::change_wanted): an
    /// unanswered happiness question does not void the request.
    pub fn direction_requested(&self) -> bool {
        self.target.is_some() && self.happy != Some(true)
    }

    /// True when the named target reads as "lower"/"less".
    pub fn wants_lower(&self) -> bool {
        self.target
            .as_deref()
            .map(|t| {
                let t = t.to_lowercase();
                t.contains("low") || t.contains("less") || t.contains("flat")
            })
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalProfile {
    pub environment: Environment,
    pub objective: Objective,
    pub flight: PreferencePair,
    pub feel: PreferencePair,
}

fn find_answer<'a>(answers: &'a HashMap<String, String>, needles: &[&str]) -> Option<&'a str> {
    let mut hit: Option<(&str, &str)> = None;
    for (k, v) in answers {
        let key = k.to_lowercase();
        if needles.iter().any(|n| key.contains(n)) {
            // Deterministic across HashMap iteration order.
            match hit {
                Some((best_key, _)) if best_key <= k.as_str() => {}
                _ => hit = Some((k, v)),
            }
        }
    }
    hit.map(|(_, v)| v.trim()).filter(|v| !v.is_empty())
}

fn parse_yes_no(raw: &str) -> Option<bool> {
    let t = raw.trim().to_lowercase();
    match t.as_str() {
        "y" | "yes" | "yeah" | "yep" | "true" | "happy" => Some(true),
        "n" | "no" | "nope" | "false" | "unhappy" => Some(false),
        _ if t.contains("unsure") || t.contains("not sure") || t.contains("maybe") => Some(false),
        _ => None,
    }
}

/// Substring-scan fallback for the primary objective: scans every answer
/// value for loosely matched intent phrases. Low confidence by design;
/// only consulted when no structured field parses.
fn scan_objective(answers: &HashMap<String, String>) -> Option<Objective> {
    let blob: String = {
        let mut vals: Vec<&str> = answers.values().map(|v| v.as_str()).collect();
        vals.sort_unstable();
        vals.join(" ").to_lowercase()
    };

    if blob.contains("gamer") && (blob.contains("beat") || blob.contains("outperform")) {
        return Some(Objective::BeatGamer);
    }
    if blob.contains("hold") && blob.contains("green") {
        return Some(Objective::HoldGreens);
    }
    if blob.contains("farther") || blob.contains("longer") || blob.contains("more distance") {
        return Some(Objective::MoreDistance);
    }
    if blob.contains("straighter") || blob.contains("dispersion") || blob.contains("accuracy") {
        return Some(Objective::Straighter);
    }
    if blob.contains("flight window") || blob.contains("trajectory") {
        return Some(Objective::FlightWindow);
    }
    None
}

/// Resolve the answer map into a [`GoalProfile`]. Unknown keys are noise,
/// unresolvable fields default, and nothing here can fail.
pub fn resolve(answers: &HashMap<String, String>) -> GoalProfile {
    let environment = find_answer(answers, &["environment", "indoor_outdoor", "location"])
        .map(|v| {
            if v.to_lowercase().contains("indoor") {
                Environment::Indoor
            } else {
                Environment::Outdoor
            }
        })
        .unwrap_or_default();

    let objective = find_answer(answers, &["primary_goal", "objective", "goal"])
        .and_then(|v| Objective::from_str(v.trim()).ok())
        .or_else(|| scan_objective(answers))
        .unwrap_or_default();

    let flight = PreferencePair {
        happy: find_answer(answers, &["flight_happy", "happy_flight", "happy_with_flight"])
            .and_then(parse_yes_no),
        target: find_answer(answers, &["flight_target", "flight_direction", "desired_flight"])
            .map(|s| s.to_string()),
    };

    let feel = PreferencePair {
        happy: find_answer(answers, &["feel_happy", "happy_feel", "happy_with_feel"])
            .and_then(parse_yes_no),
        target: find_answer(answers, &["feel_target", "feel_direction", "desired_feel"])
            .map(|s| s.to_string()),
    };

    GoalProfile {
        environment,
        objective,
        flight,
        feel,
    }
}

/// Declared current carry distance in yards, if any answer carries one.
pub fn declared_carry(answers: &HashMap<String, String>) -> Option<f64> {
    let raw = find_answer(answers, &["carry_distance", "current_carry", "carry"])?;
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

/// Declared current/"gamer" shaft description, if any answer names one.
pub fn declared_gamer(answers: &HashMap<String, String>) -> Option<String> {
    find_answer(answers, &["current_shaft", "gamer_shaft", "gamer"]).map(|s| s.to_string())
}
