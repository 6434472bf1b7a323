// file: src/main.rs
// version: 1.0.0
// guid: 2f6b9d41-7e3a-4c58-b0d2-9a1e4f7c3b65

//! AoE Volumes - Main entry point

use aoe_volumes::{cli, logging::logger, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet)?;

    let shutdown_signal = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        warn!("Received Ctrl+C, aborting");
    };

    tokio::select! {
        result = cli::run(cli) => {
            if let Err(e) = result {
                error!("{}", e);
                std::process::exit(1);
            }
            Ok(())
        }
        _ = shutdown_signal => {
            warn!("Interrupted; a storage command may have been left half done");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
