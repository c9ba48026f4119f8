use std::io::Read;

use tracing::{debug, warn};

use crate::error::FitResult;

/// A raw per-shot table: one header row plus one row of parsed values per
/// shot. Cells that fail numeric parsing are `None`.
#[derive(Debug, Clone, Default)]
pub struct ShotTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<f64>>>,
}

impl ShotTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of one column, padded with `None` for short rows.
    pub fn column(&self, idx: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|r| r.get(idx).copied().flatten())
            .collect()
    }
}

fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    // Instruments emit "R"/"L" direction prefixes on lateral columns;
    // treat left as negative.
    if let Some(rest) = trimmed.strip_prefix('L') {
        return rest.trim().parse::<f64>().ok().map(|v| -v);
    }
    if let Some(rest) = trimmed.strip_prefix('R') {
        return rest.trim().parse::<f64>().ok();
    }
    trimmed.parse().ok()
}

/// Load a shot table from CSV. Generic over `Read` so tests can feed a
/// `Cursor`. The first record is the header row; an immediately following
/// record with no numeric cells (a units row) is skipped.
pub fn load_shot_table<R: Read>(reader: R) -> FitResult<ShotTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut table = ShotTable::default();
    let mut skipped = 0usize;

    for (i, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[row {}] CSV parse error, skipping: {}", i + 1, e);
                skipped += 1;
                continue;
            }
        };

        if table.headers.is_empty() {
            table.headers = rec.iter().map(|s| s.trim().to_string()).collect();
            continue;
        }

        let row: Vec<Option<f64>> = rec.iter().map(parse_cell).collect();

        // Units row: directly under the header, nothing numeric.
        if table.rows.is_empty() && row.iter().all(|v| v.is_none()) {
            debug!("skipping non-numeric units row under header");
            continue;
        }

        if row.iter().any(|v| v.is_some()) {
            table.rows.push(row);
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        debug!("skipped {} empty or unparseable rows", skipped);
    }

    Ok(table)
}
