use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use clipforge::config::Config;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with planning limits; flags given on the command line win.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the CLIP reaction and final assembly layout for a construct batch.
    Plan(cmd::plan::PlanArgs),
    /// Reduce a construct batch to CLIP triples without laying out wells.
    Check(cmd::check::CheckArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Plan(args) => {
            let mut config = args.config.clone();
            if let Some(path) = &cli.config {
                info!("⚖️  Loading limits from: {}", path);
                match Config::load_from_file(path) {
                    Ok(mut file_config) => {
                        if let Some(sub) = matches.subcommand_matches("plan") {
                            file_config.merge_from_cli(&args.config, sub);
                        }
                        config = file_config;
                    }
                    Err(e) => {
                        error!("❌ Could not load config '{}': {}", path, e);
                        process::exit(1);
                    }
                }
            }
            cmd::plan::run(&args, &config)
        }
        Commands::Check(args) => cmd::check::run(&args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
