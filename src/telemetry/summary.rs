use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use super::loader::ShotTable;
use super::metric::{normalize_header, resolve_column, Metric};
use crate::normalize::{mean, round_to, std_dev};

/// Display/comparison precision for summary statistics.
const SUMMARY_DECIMALS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStat {
    pub mean: f64,
    pub std_dev: f64,
}

/// One aggregated test session for one shaft.
///
/// A metric appears in `stats` only when at least one shot carried a value
/// for it; consumers must treat absence as "unknown", never as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub shaft_id: String,
    pub shots: usize,
    pub stats: BTreeMap<Metric, MetricStat>,
}

impl SummaryRow {
    pub fn mean(&self, metric: Metric) -> Option<f64> {
        self.stats.get(&metric).map(|s| s.mean)
    }

    pub fn sd(&self, metric: Metric) -> Option<f64> {
        self.stats.get(&metric).map(|s| s.std_dev)
    }
}

/// Reduce a raw shot table to one summary row tagged with `shaft_id`.
///
/// Columns are resolved alias-tolerantly per metric; statistics cover
/// non-missing samples only and are rounded for stable display.
pub fn summarize(table: &ShotTable, shaft_id: &str) -> SummaryRow {
    let normalized: Vec<String> = table.headers.iter().map(|h| normalize_header(h)).collect();

    let mut stats = BTreeMap::new();
    for metric in Metric::iter() {
        let Some(col_idx) = resolve_column(metric, &normalized) else {
            continue;
        };
        let samples: Vec<f64> = table.column(col_idx).into_iter().flatten().collect();
        let (Some(m), Some(sd)) = (mean(&samples), std_dev(&samples)) else {
            continue;
        };
        stats.insert(
            metric,
            MetricStat {
                mean: round_to(m, SUMMARY_DECIMALS),
                std_dev: round_to(sd, SUMMARY_DECIMALS),
            },
        );
    }

    debug!(
        "summarized {} shots for '{}' across {} metrics",
        table.rows.len(),
        shaft_id,
        stats.len()
    );

    SummaryRow {
        shaft_id: shaft_id.to_string(),
        shots: table.rows.len(),
        stats,
    }
}
