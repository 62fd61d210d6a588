//! Routing table CLI
//!
//! # Usage
//!
//! ```bash
//! # Directed network, default config, table to stdout
//! cargo run --bin route-table --release -- --network graph/network.json
//!
//! # Undirected, written to a file with settings from YAML
//! cargo run --bin route-table --release -- \
//!     --network graph/network.json --config routing.yaml \
//!     --undirected --output graph/routing_table.json
//! ```

use clap::Parser;
use routing_engine::features::routing::{
    InMemoryRoutingTableSink, JsonNetworkSource, JsonRoutingTableWriter,
};
use routing_engine::{Result, RoutingConfig, RoutingUseCase, RoutingUseCaseImpl};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "route-table")]
#[command(about = "Compute the all-pairs routing table of a logistics network", long_about = None)]
struct Cli {
    /// JSON network document with `nodes` and `edges`
    #[arg(short, long)]
    network: PathBuf,

    /// YAML configuration (schema v1)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat every edge as bidirectional (overrides the config)
    #[arg(long)]
    undirected: bool,

    /// Pretty-print the JSON output (overrides the config)
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(kind = %e.kind(), "Routing engine failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => RoutingConfig::from_yaml(path)?,
        None => RoutingConfig::default(),
    };
    if cli.undirected {
        config = config.directed(false);
    }
    if cli.pretty {
        config = config.export(|c| c.pretty(true));
    }

    let usecase = RoutingUseCaseImpl::from_config(&config);
    let source = JsonNetworkSource::new(&cli.network);

    match &cli.output {
        Some(path) => {
            let writer = JsonRoutingTableWriter::new(path, config.export.clone());
            usecase.run(&source, &writer)?;
        }
        None => {
            let sink = InMemoryRoutingTableSink::new();
            usecase.run(&source, &sink)?;
            if let Some(table) = sink.latest() {
                let writer = JsonRoutingTableWriter::new("-", config.export.clone());
                let mut stdout = std::io::stdout().lock();
                writer.write_to(&table, &mut stdout)?;
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}
