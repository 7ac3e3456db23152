//! Alchemy calculator command line.
//!
//! Loads a reagent catalog, fills a container's slots from `--reagent`
//! arguments and prints the resulting potion.

use alchemy_calc::config::DEFAULT_LOG_FILTER;
use alchemy_calc::{AlchemyConfig, Catalog, ContainerKind, PotionResolver};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Alchemy Crafting Calculator - DC, value and effects of a potion
#[derive(Parser, Debug)]
#[command(name = "alchemy-calc", version)]
#[command(about = "Compute the DC, value and effects of a potion brewed from reagents")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reagent catalog (JSON); overrides the config file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Container type: glass (4 slots) or crystal (5 slots)
    #[arg(long)]
    container: Option<ContainerKind>,

    /// Reagent for the next slot, as "<name> (<category>, <rarity>)"; "" leaves the slot empty
    #[arg(long = "reagent", short = 'r')]
    reagents: Vec<String>,

    /// Print every catalog reagent and exit
    #[arg(long)]
    list: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AlchemyConfig::load(path),
        None => Ok(AlchemyConfig::default()),
    };
    let log_filter = config
        .as_ref()
        .map(|c| c.log_filter.as_str())
        .unwrap_or(DEFAULT_LOG_FILTER);

    // Logs go to stderr, stdout carries only the potion
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = config
        .map_err(|e| e.to_string())
        .and_then(|config| run(&args, config).map_err(|e| e.to_string()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            // Shown regardless of the log filter
            eprintln!("error: {message}");
            tracing::debug!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: AlchemyConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog_path = args.catalog.clone().unwrap_or(config.catalog);
    let catalog = Catalog::load(&catalog_path)?;

    if args.list {
        for entry in catalog.display_entries() {
            println!("{entry}");
        }
        return Ok(());
    }

    let container = args.container.unwrap_or(config.container);
    tracing::debug!(%container, slots = args.reagents.len(), "brewing");

    let potion = PotionResolver::new(&catalog).brew_display(container, &args.reagents)?;

    match args.format {
        OutputFormat::Text => println!("{potion}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&potion)?),
    }
    Ok(())
}
