use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Canonical launch-monitor metrics tracked per shot.
///
/// Raw exports name these columns in many human-authored spellings; the
/// alias lists below are matched after [`normalize_header`] folding, so
/// case, punctuation, and trailing unit suffixes never matter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "title_case")]
pub enum Metric {
    BallSpeed,
    ClubSpeed,
    SmashFactor,
    Carry,
    SpinRate,
    LaunchAngle,
    LandingAngle,
    PeakHeight,
    FaceToPath,
    DynamicLie,
    ImpactOffset,
    ImpactHeight,
    ClubPath,
    AttackAngle,
    FaceAngle,
    SpinAxis,
    Curve,
    CarrySide,
    TotalSide,
    LaunchDirection,
}

impl Metric {
    /// Normalized alias spellings for this metric, in resolution priority
    /// order. Entries must already be in [`normalize_header`] form.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::BallSpeed => &["ballspeed", "ballvelocity", "ballmph"],
            Self::ClubSpeed => &["clubspeed", "clubheadspeed", "swingspeed"],
            Self::SmashFactor => &["smashfactor", "smash", "efficiency"],
            Self::Carry => &["carry", "carrydistance", "carrydist"],
            Self::SpinRate => &["spinrate", "spin", "backspin", "totalspin"],
            Self::LaunchAngle => &["launchangle", "launch", "vla", "vertlaunch"],
            Self::LandingAngle => &["landingangle", "descentangle", "landang"],
            Self::PeakHeight => &["peakheight", "apex", "maxheight", "height"],
            Self::FaceToPath => &["facetopath", "ftp", "facepath"],
            Self::DynamicLie => &["dynamiclie", "dynlie", "lie"],
            Self::ImpactOffset => &["impactoffset", "horizimpact", "strikeoffset"],
            Self::ImpactHeight => &["impactheight", "vertimpact", "strikeheight"],
            Self::ClubPath => &["clubpath", "path"],
            Self::AttackAngle => &["attackangle", "angleofattack", "aoa"],
            Self::FaceAngle => &["faceangle", "face"],
            Self::SpinAxis => &["spinaxis", "axis"],
            Self::Curve => &["curve", "curvature", "sidetotal"],
            Self::CarrySide => &["carryside", "sidecarry", "offlinecarry"],
            Self::TotalSide => &["totalside", "side", "offline", "lateral"],
            Self::LaunchDirection => &["launchdirection", "launchdir", "hla", "horizlaunch"],
        }
    }
}

/// Unit suffixes stripped from the tail of a folded header before alias
/// matching ("Ball Speed (mph)" -> "ballspeed").
const UNIT_SUFFIXES: &[&str] = &["mph", "rpm", "deg", "degrees", "yds", "yards", "ft", "mm"];

/// Fold a raw column header into its comparable form: lowercase, ASCII
/// alphanumerics only, trailing unit suffix removed.
pub fn normalize_header(raw: &str) -> String {
    let mut folded: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    for suffix in UNIT_SUFFIXES {
        if folded.len() > suffix.len() && folded.ends_with(suffix) {
            folded.truncate(folded.len() - suffix.len());
            break;
        }
    }
    folded
}

/// Resolve a metric to a column index. The first alias with a matching
/// column wins; duplicate columns from repeated headers are ignored.
pub fn resolve_column(metric: Metric, normalized_headers: &[String]) -> Option<usize> {
    for alias in metric.aliases() {
        if let Some(idx) = normalized_headers.iter().position(|h| h == alias) {
            return Some(idx);
        }
    }
    None
}
