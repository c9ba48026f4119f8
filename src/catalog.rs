use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::FitResult;

/// Immutable catalog entity: one shaft the fitter can put in a test club.
///
/// `id` is the stable join key for every candidate-identifying operation;
/// positional indices are never used across stage boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shaft {
    pub id: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub flex_label: String,
    #[serde(default)]
    pub weight_g: f64,
    /// Flex stiffness on the fitter's 1-10 scale.
    #[serde(default)]
    pub flex_score: f64,
    /// Launch bias: higher launches the ball higher.
    #[serde(default)]
    pub launch_score: f64,
    #[serde(default)]
    pub stability: f64,
    #[serde(default)]
    pub tip_stiffness: f64,
    #[serde(default)]
    pub torque: f64,
    #[serde(default)]
    pub mid_stiffness: f64,
    /// Free-form feel adjectives ("smooth active", "stout stable").
    #[serde(default)]
    pub feel: String,
}

impl Shaft {
    pub fn label(&self) -> String {
        let label = format!("{} {} {}", self.brand, self.model, self.flex_label);
        let label = label.trim().to_string();
        if label.is_empty() {
            self.id.clone()
        } else {
            label
        }
    }

    pub fn feel_tags(&self) -> Vec<String> {
        self.feel
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub shafts: Vec<Shaft>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.shafts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Shaft> {
        self.shafts.iter().find(|s| s.id == id)
    }

    pub fn label_for(&self, id: &str) -> String {
        self.get(id).map(|s| s.label()).unwrap_or_else(|| id.to_string())
    }

    /// Load from CSV. Rows without a usable `id` are skipped; a catalog
    /// where no row carries an id comes back empty rather than erroring,
    /// and every id-dependent stage then returns empty results.
    pub fn load<R: Read>(reader: R) -> FitResult<Catalog> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut shafts: Vec<Shaft> = Vec::new();
        let mut skipped = 0usize;

        for result in rdr.deserialize::<Shaft>() {
            match result {
                Ok(shaft) if !shaft.id.trim().is_empty() => shafts.push(shaft),
                Ok(_) => skipped += 1,
                Err(e) => {
                    warn!("skipping malformed catalog row: {}", e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            debug!("catalog load skipped {} rows without a stable id", skipped);
        }

        Ok(Catalog { shafts })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FitResult<Catalog> {
        Self::load(File::open(path)?)
    }
}
