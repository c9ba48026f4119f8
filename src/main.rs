use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process;
use swingfit::api::FitSession;
use swingfit::catalog::Catalog;
use swingfit::config::Config;
use swingfit::error::FitError;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/shaft_catalog.csv")]
    catalog: String,

    /// Interview answers as a flat JSON string map.
    #[arg(global = true, short, long)]
    answers: Option<String>,

    /// JSON config profile; CLI flags override individual fields.
    #[arg(global = true, long)]
    profile: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Fit(cmd::fit::FitArgs),
    Shortlist(cmd::shortlist::ShortlistArgs),
}

fn load_answers(path: &str) -> HashMap<String, String> {
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                warn!("could not parse answers file '{}': {}", path, e);
                HashMap::new()
            }
        },
        Err(e) => {
            warn!("could not read answers file '{}': {}", path, e);
            HashMap::new()
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    // Raw matches are kept so file-profile and CLI overrides compose in
    // the right order.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    info!("🏌️  Initializing swingfit...");

    info!("📂 Loading catalog: {}", cli.catalog);
    let catalog = Catalog::load_from_file(&cli.catalog).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    if catalog.is_empty() {
        warn!("catalog is empty or carries no stable shaft ids");
    }

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Fit(args) => (
            args.config.clone(),
            matches.subcommand_matches("fit").unwrap(),
        ),
        Commands::Shortlist(args) => (
            args.config.clone(),
            matches.subcommand_matches("shortlist").unwrap(),
        ),
    };

    let config = if let Some(path) = &cli.profile {
        if Path::new(path).exists() {
            info!("⚖️  Loading config profile: {}", path);
            match Config::load_from_file(path) {
                Ok(mut file_config) => {
                    file_config.merge_from_cli(&cli_config, sub_matches);
                    file_config
                }
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            }
        } else {
            error!("{}", FitError::Config(format!("profile '{}' not found", path)));
            process::exit(1);
        }
    } else {
        cli_config.clone()
    };

    let mut session = FitSession::new(catalog, config);
    if let Some(path) = &cli.answers {
        session.set_answers(load_answers(path));
    }

    match cli.command {
        Commands::Fit(args) => cmd::fit::run(args, session),
        Commands::Shortlist(args) => cmd::shortlist::run(args, session),
    }
}
