// file: src/lib.rs
// version: 1.0.0
// guid: 5a204e6a-566f-475b-8090-cc6479f874a6

//! # AoE Volumes
//!
//! Manages LVM logical volumes and their ATA-over-Ethernet exports by driving
//! `lvcreate`/`lvremove`, `vblade-persist` and the aoetools from the shell.
//!
//! Command execution sits behind the [`executor::CommandExecutor`] trait so the
//! same [`volume::AoeDriver`] can run real commands or only log them.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod security;
pub mod utils;
pub mod volume;

pub use config::DriverConfig;
pub use error::{Result, VolumeError};
pub use executor::{CommandExecutor, CommandOutput, FakeExecutor, LocalExecutor};
pub use volume::AoeDriver;

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
