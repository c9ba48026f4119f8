pub mod decision;
pub mod efficiency;
pub mod weights;

pub use self::decision::{decide, DecisionReport, GamerCheck, ScoreRecord};
pub use self::efficiency::{build_comparison, confidence_score, efficiency_score, ComparisonRow};
pub use self::weights::GoalWeights;
