use crate::reports;
use clap::Args;
use swingfit::api::FitSession;
use swingfit::config::Config;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ShortlistArgs {
    #[command(flatten)]
    pub config: Config,

    /// Override the declared carry distance (yards).
    #[arg(long)]
    pub carry: Option<f64>,
}

pub fn run(args: ShortlistArgs, mut session: FitSession) {
    if let Some(carry) = args.carry {
        // Overrides whatever the interview said.
        session.insert_answer("carry_distance", format!("{}", carry));
    }

    let picks = session.shortlist();
    if picks.is_empty() {
        info!("catalog is empty or carries no stable ids; no shortlist");
        return;
    }

    println!("\n📋 === PRE-TEST SHORTLIST ({}) ===", session.profile().objective);
    reports::print_shortlist(&picks);
}
