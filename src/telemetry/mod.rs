pub mod loader;
pub mod metric;
pub mod summary;

pub use self::loader::ShotTable;
pub use self::metric::Metric;
pub use self::summary::{summarize, MetricStat, SummaryRow};
