use crate::reports;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::process;
use swingfit::api::FitSession;
use swingfit::config::Config;
use swingfit::telemetry::loader::load_shot_table;
use tracing::{error, info, warn};

#[derive(Args, Debug, Clone)]
pub struct FitArgs {
    #[command(flatten)]
    pub config: Config,

    /// Directory of per-shaft shot CSVs; the file stem is the shaft id.
    #[arg(short, long, default_value = "shots")]
    pub shots: PathBuf,

    /// Explicit baseline/"gamer" shaft id. Falls back to the declared
    /// gamer in the answers file.
    #[arg(short, long)]
    pub baseline: Option<String>,
}

pub fn run(args: FitArgs, mut session: FitSession) {
    if let Some(id) = &args.baseline {
        session.set_baseline(id.clone());
    }

    let entries = match fs::read_dir(&args.shots) {
        Ok(entries) => entries,
        Err(e) => {
            error!("could not read shots directory '{}': {}", args.shots.display(), e);
            process::exit(1);
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    for path in &paths {
        let shaft_id = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let file = match fs::File::open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("skipping '{}': {}", path.display(), e);
                continue;
            }
        };
        match load_shot_table(file) {
            Ok(table) if !table.is_empty() => {
                session.add_batch(&table, &shaft_id);
            }
            Ok(_) => warn!("'{}' carried no shot rows", path.display()),
            Err(e) => warn!("skipping '{}': {}", path.display(), e),
        }
    }

    let comparison = session.comparison();
    if comparison.is_empty() {
        info!("no telemetry loaded; nothing to compare yet");
        return;
    }

    println!("\n🏌️  === SHAFT COMPARISON === ");
    reports::print_comparison_table(&comparison);

    let report = session.decision();
    println!("\n🎯 === DECISION MATRIX ({}) ===", session.profile().objective);
    reports::print_decision_matrix(&report);

    reports::print_advisories(&session.advice());
}
