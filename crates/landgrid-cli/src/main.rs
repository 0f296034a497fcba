//! Landgrid CLI
//!
//! Stands in for the dapp's mint button: builds a spiral walk from the
//! environment and flags, mints, and prints the assigned parcels.

mod cli;
mod output;

use std::io::{self, BufWriter, Write};

use clap::Parser;
use landgrid_spiral::{parse_batch_count, SpiralWalk, WalkConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{check_layer_count, lookup, Cli, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "landgrid=info,landgrid_spiral=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.walk_config(WalkConfig::from_env()?)?;

    tracing::info!(
        origin = %config.origin,
        geometry = %config.geometry,
        "landgrid walk configured"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Mint { count, json } => {
            let count = parse_batch_count(&count)?;
            let mut walk = SpiralWalk::from_config(&config)?;
            let batch = walk.mint_batch(count)?;

            if json {
                output::write_json_lines(&mut out, &batch)?;
            } else {
                output::write_table(&mut out, &batch)?;
            }
            tracing::info!(minted = walk.minted_count(), layer = walk.layer(), "mint finished");
        }
        Command::Lookup { token_id } => {
            let assignment = lookup(&config, token_id)?;
            output::write_table(&mut out, &[assignment])?;
        }
        Command::Layers { count } => {
            check_layer_count(config.geometry, count)?;
            output::write_layers(&mut out, &config.geometry, count)?;
        }
    }

    out.flush()?;
    Ok(())
}
