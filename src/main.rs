use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use floor_finder::config::{self, Config};
use floor_finder::error::ResultExt;
use floor_finder::finder::{CrossFloorLocator, ResultRow};
use floor_finder::locations::{self, LocationRegistry};
use floor_finder::logging;
use floor_finder::stdin_commands::SessionDriver;

#[derive(Parser, Debug)]
#[command(
    name = "floor-finder",
    version,
    about = "Find a location on any floor of the building"
)]
struct Cli {
    /// Location registry JSON (overrides `recordsPath` in config)
    #[arg(long, global = true)]
    records: Option<PathBuf>,
    /// Config file (default: ~/.floor-finder/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search every floor for a location
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List floors in order with their labels and location counts
    Floors,
    /// Drive a finder session with JSONL commands on stdin
    Session {
        /// Floor the map starts on
        #[arg(long)]
        floor: Option<String>,
    },
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FloorSummary {
    floor: String,
    label: String,
    locations: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let mut config = config::load_config(cli.config.as_deref());
    let records_path = cli.records.clone().or_else(|| config.get_records_path());

    match cli.command {
        Commands::Search { query, limit } => {
            if let Some(limit) = limit {
                config.result_limit = Some(limit);
            }
            let registry = load_required(records_path)?;
            let locator = CrossFloorLocator::from_config(&config, Some(registry));
            let rows: Vec<ResultRow> = locator
                .search(Some(&query))
                .iter()
                .map(|m| ResultRow::from_match(m, locator.labels()))
                .collect();

            if cli.json {
                print_json(&rows)?;
            } else if rows.is_empty() {
                println!("{}", floor_finder::finder::NO_RESULTS_MESSAGE);
            } else {
                for row in &rows {
                    println!("{}\t{}\t{}", row.id, row.label, row.meta());
                }
            }
        }
        Commands::Floors => {
            let registry = load_required(records_path)?;
            let summaries = floor_summaries(&config, &registry);
            if cli.json {
                print_json(&summaries)?;
            } else {
                for s in &summaries {
                    println!("{}\t{}\t{}", s.floor, s.label, s.locations);
                }
            }
        }
        Commands::Session { floor } => {
            // Without a registry every search simply comes back empty
            let registry = records_path
                .as_deref()
                .and_then(|path| locations::load_registry(path).log_err())
                .map(Arc::new);
            let locator = CrossFloorLocator::from_config(&config, registry);
            let mut driver = SessionDriver::new(locator, floor.as_deref());

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            driver.run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}

fn load_required(path: Option<PathBuf>) -> anyhow::Result<Arc<LocationRegistry>> {
    let path = path.context("no location registry: pass --records or set recordsPath in config")?;
    let registry = locations::load_registry(&path)
        .with_context(|| format!("loading locations from {}", path.display()))?;
    info!(records = registry.len(), "Registry ready");
    Ok(Arc::new(registry))
}

/// Configured floors first, then any other floors found in the data.
fn floor_summaries(config: &Config, registry: &LocationRegistry) -> Vec<FloorSummary> {
    let order = config.get_floor_order();
    let labels = config.get_floor_labels();
    let counts = registry.floor_counts();

    let known = order.iter().map(str::to_string);
    let extra = counts.keys().filter(|f| !order.contains(f)).cloned();

    known
        .chain(extra)
        .map(|floor| FloorSummary {
            label: labels.label(&floor),
            locations: counts.get(&floor).copied().unwrap_or(0),
            floor,
        })
        .collect()
}

fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}
