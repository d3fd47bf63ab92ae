use crate::reports;
use clap::Args;
use clipforge::config::Config;
use clipforge::error::ClipResult;
use clipforge::loader::load_constructs;
use clipforge::plan::Planner;
use clipforge::script::{clip_transfers, spotting_groups, CsvInventory};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: Config,

    /// Constructs CSV (header row, then id followed by element names).
    #[arg(short, long)]
    pub constructs: PathBuf,

    /// Source plate sheets (name,well[,concentration]), one per deck slot.
    #[arg(short, long, num_args = 1..)]
    pub sources: Vec<PathBuf>,

    /// Write the plan as JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the resolved CLIP transfer list as JSON (needs --sources).
    #[arg(long)]
    pub transfers: Option<PathBuf>,
}

pub fn run(args: &PlanArgs, config: &Config) -> ClipResult<()> {
    info!("📂 Loading constructs: {}", args.constructs.display());
    let rows = load_constructs(&args.constructs)?;

    let planner = Planner::new(config.plan.clone())?;
    let plan = planner.plan_raw(&rows)?;

    reports::print_reaction_table(&plan.unique_reactions);
    reports::print_assembly_table(&plan.final_assemblies);
    reports::print_spotting_table(&spotting_groups(&plan.final_assemblies));
    reports::print_summary(&plan.summary, &config.plan);

    if let Some(path) = &args.output {
        fs::write(path, plan.to_json()?)?;
        info!("💾 Plan written to {}", path.display());
    }

    if !args.sources.is_empty() {
        let inventory = CsvInventory::load(&args.sources, &config.sources.deck_positions())?;
        let transfers = clip_transfers(&plan.unique_reactions, &inventory)?;
        reports::print_transfer_table(&transfers);

        if let Some(path) = &args.transfers {
            fs::write(path, serde_json::to_string_pretty(&transfers)?)?;
            info!("💾 Transfers written to {}", path.display());
        }
    }

    Ok(())
}
