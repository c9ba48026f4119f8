//! Session-level service layer: owns one fitting session's snapshot
//! (catalog, config, answer map, accumulated summary rows) and recomputes
//! every scoring artifact from scratch on each call. No scoring state is
//! cached between calls.
//!
//! The row list is append-only; in a concurrent adaptation it needs a
//! single writer per session, while reads can share a snapshot.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::advisor::{advise, Advisory};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::profile::{self, GoalProfile};
use crate::scoring::{build_comparison, decide, ComparisonRow, DecisionReport};
use crate::shortlist::{shortlist, ShortlistEntry};
use crate::telemetry::{summarize, ShotTable, SummaryRow};

pub struct FitSession {
    pub catalog: Catalog,
    pub config: Config,
    answers: HashMap<String, String>,
    rows: Vec<SummaryRow>,
    baseline_id: Option<String>,
}

impl FitSession {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog,
            config,
            answers: HashMap::new(),
            rows: Vec::new(),
            baseline_id: None,
        }
    }

    pub fn set_answers(&mut self, answers: HashMap<String, String>) {
        self.answers = answers;
    }

    pub fn insert_answer(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(key.into(), value.into());
    }

    /// Explicit baseline selection wins over identity matching.
    pub fn set_baseline(&mut self, id: impl Into<String>) {
        self.baseline_id = Some(id.into());
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn profile(&self) -> GoalProfile {
        profile::resolve(&self.answers)
    }

    /// The baseline shaft id: the explicit selection if set, else the
    /// declared gamer identity-matched against the catalog (exact id, then
    /// case-insensitive label). `None` when nothing matches — downstream
    /// deltas then stay neutral.
    pub fn baseline_id(&self) -> Option<String> {
        if let Some(id) = &self.baseline_id {
            return Some(id.clone());
        }
        let declared = profile::declared_gamer(&self.answers)?;
        if let Some(shaft) = self.catalog.get(&declared) {
            return Some(shaft.id.clone());
        }
        let wanted = declared.to_lowercase();
        let matched = self
            .catalog
            .shafts
            .iter()
            .find(|s| s.label().to_lowercase() == wanted)
            .map(|s| s.id.clone());
        if matched.is_none() {
            warn!("declared gamer '{}' matched nothing in the catalog", declared);
        }
        matched
    }

    /// Summarize one uploaded shot batch and append it as a new summary
    /// row. Rows are never merged: retesting a shaft appends a second row.
    pub fn add_batch(&mut self, table: &ShotTable, shaft_id: &str) -> &SummaryRow {
        let row = summarize(table, shaft_id);
        info!(
            "added batch for '{}': {} shots, {} metrics",
            shaft_id,
            row.shots,
            row.stats.len()
        );
        self.rows.push(row);
        self.rows.last().expect("row just pushed")
    }

    pub fn comparison(&self) -> Vec<ComparisonRow> {
        build_comparison(
            &self.rows,
            &self.catalog,
            self.baseline_id().as_deref(),
            &self.config.scoring,
        )
    }

    pub fn decision(&self) -> DecisionReport {
        decide(&self.comparison(), &self.profile(), &self.config.decision)
    }

    /// Advisories for the decision's highlighted shaft; empty when no
    /// telemetry exists yet.
    pub fn advice(&self) -> Vec<Advisory> {
        let report = self.decision();
        let Some(winner_id) = report.highlighted else {
            return Vec::new();
        };
        let Some(winner) = self.latest_row(&winner_id) else {
            return Vec::new();
        };
        let baseline = self
            .baseline_id()
            .and_then(|id| self.latest_row(&id).cloned());
        advise(winner, baseline.as_ref(), &self.config.advisor)
    }

    pub fn shortlist(&self) -> Vec<ShortlistEntry> {
        shortlist(
            &self.catalog,
            &self.profile(),
            profile::declared_carry(&self.answers),
            self.baseline_id().as_deref(),
            &self.config.shortlist,
        )
    }

    fn latest_row(&self, shaft_id: &str) -> Option<&SummaryRow> {
        self.rows.iter().rev().find(|r| r.shaft_id == shaft_id)
    }
}
