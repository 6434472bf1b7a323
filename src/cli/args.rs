// file: src/cli/args.rs
// version: 1.0.0
// guid: ed3e9d3e-ee1e-4e8e-b6bb-7d32e0f52a1d

//! Command line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aoe-volumes")]
#[command(about = "Manage LVM volumes and their ATA-over-Ethernet exports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, env = "AOE_VOLUMES_CONFIG", help = "YAML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Volume group that holds exported volumes")]
    pub volume_group: Option<String>,

    #[arg(long, global = true, help = "Network device to export volumes on")]
    pub aoe_eth_dev: Option<String>,

    #[arg(long, global = true, help = "Prefix for privileged commands (empty for none)")]
    pub root_helper: Option<String>,

    #[arg(long, global = true, help = "Log commands instead of executing them")]
    pub fake: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a logical volume
    CreateVolume {
        name: String,

        #[arg(short, long, default_value_t = 0, help = "Size in GB; 0 creates a 100M volume")]
        size: u64,
    },

    /// Delete a logical volume
    DeleteVolume { name: String },

    /// Export a logical volume over AoE
    CreateExport {
        name: String,

        #[arg(long)]
        shelf: u32,

        #[arg(long)]
        blade: u32,
    },

    /// Discover AoE devices and show their status
    Discover { name: String },

    /// Stop and destroy the AoE export of a volume
    RemoveExport {
        name: String,

        #[arg(long)]
        shelf: u32,

        #[arg(long)]
        blade: u32,
    },

    /// Restart every persisted export
    EnsureExports,

    /// Check that the storage tools are installed
    CheckPrereqs {
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    ShowConfig {
        #[arg(long)]
        json: bool,
    },
}
