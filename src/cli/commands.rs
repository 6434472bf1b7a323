// file: src/cli/commands.rs
// version: 1.0.0
// guid: b888c2b5-3c3c-41e9-a659-b536362cb532

//! Command implementations for the CLI

use super::args::{Cli, Commands};
use crate::{
    config::{loader::ConfigLoader, DriverConfig},
    executor::{CommandExecutor, LocalExecutor},
    logging::with_async_operation_span,
    utils::SystemUtils,
    volume::AoeDriver,
    Result,
};
use tracing::{error, info};

/// Build the effective configuration: file, then environment, then flags
pub fn resolve_config(cli: &Cli) -> Result<DriverConfig> {
    let loader = ConfigLoader::new();
    let mut config = loader.resolve(cli.config.as_deref())?;

    if let Some(ref vg) = cli.volume_group {
        config.volume_group = vg.clone();
    }
    if let Some(ref dev) = cli.aoe_eth_dev {
        config.aoe_eth_dev = dev.clone();
    }
    if let Some(ref helper) = cli.root_helper {
        config.root_helper = helper.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Run the parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::CheckPrereqs { json } => return check_prerequisites_command(json),
        Commands::ShowConfig { json } => {
            let config = resolve_config(&cli)?;
            return show_config_command(&config, json);
        }
        _ => {}
    }

    let config = resolve_config(&cli)?;

    if cli.fake {
        info!("Fake mode: commands will be logged, not executed");
        let driver = AoeDriver::fake(config);
        let result = driver_command(&driver, &cli.command).await;
        for cmd in driver.executor().commands() {
            println!("FAKE AOE: {}", cmd);
        }
        result
    } else {
        let driver = AoeDriver::new(config, LocalExecutor::new());
        driver_command(&driver, &cli.command).await
    }
}

/// Dispatch a volume or export command to the driver
pub async fn driver_command<E: CommandExecutor>(
    driver: &AoeDriver<E>,
    command: &Commands,
) -> Result<()> {
    match command {
        Commands::CreateVolume { name, size } => {
            with_async_operation_span("create_volume", || driver.create_volume(name, *size))
                .await?;
            info!("Volume {} created", name);
        }
        Commands::DeleteVolume { name } => {
            with_async_operation_span("delete_volume", || driver.delete_volume(name)).await?;
            info!("Volume {} deleted", name);
        }
        Commands::CreateExport { name, shelf, blade } => {
            with_async_operation_span("create_export", || {
                driver.create_export(name, *shelf, *blade)
            })
            .await?;
            info!("Volume {} exported as e{}.{}", name, shelf, blade);
        }
        Commands::Discover { name } => {
            let status =
                with_async_operation_span("discover_volume", || driver.discover_volume(name))
                    .await?;
            if !status.trim().is_empty() {
                println!("{}", status.trim_end());
            }
        }
        Commands::RemoveExport { name, shelf, blade } => {
            with_async_operation_span("remove_export", || {
                driver.remove_export(name, *shelf, *blade)
            })
            .await?;
            info!("Export e{}.{} removed", shelf, blade);
        }
        Commands::EnsureExports => {
            with_async_operation_span("ensure_exports", || driver.ensure_exports()).await;
            info!("Exports ensured");
        }
        Commands::CheckPrereqs { .. } | Commands::ShowConfig { .. } => {}
    }

    Ok(())
}

/// Check system prerequisites
pub fn check_prerequisites_command(json_output: bool) -> Result<()> {
    info!("Checking system prerequisites for AoE volume management");

    let report = SystemUtils::check_prerequisites();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.is_ready() {
        info!("✓ All required storage commands are available");
    } else {
        error!("✗ Missing required commands: {}", report.missing.join(", "));
        let mut packages: Vec<&str> = report
            .missing
            .iter()
            .filter_map(|cmd| SystemUtils::package_for(cmd))
            .collect();
        packages.dedup();
        if !packages.is_empty() {
            info!("Install missing packages:");
            info!("  sudo apt install {}", packages.join(" "));
        }
    }

    if report.aoe_module_loaded {
        info!("✓ aoe kernel module is loaded");
    } else {
        info!("⚠ aoe kernel module not loaded - run 'sudo modprobe aoe'");
    }

    if report.is_root {
        info!("✓ Running as root");
    } else {
        info!("⚠ Not running as root - commands go through the root helper");
    }

    Ok(())
}

/// Print the effective configuration
pub fn show_config_command(config: &DriverConfig, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", serde_yaml::to_string(config)?);
    }
    Ok(())
}
