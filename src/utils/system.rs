// file: src/utils/system.rs
// version: 1.0.0
// guid: f4fd9557-c57c-4175-a987-7f53f5e21d12

//! System utility functions

use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// Tools the driver shells out to
pub const REQUIRED_COMMANDS: &[&str] = &[
    "vgs",
    "lvcreate",
    "lvremove",
    "vblade-persist",
    "aoe-discover",
    "aoe-stat",
];

/// Outcome of a prerequisite check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrereqReport {
    /// Required commands not found in PATH
    pub missing: Vec<String>,
    /// Whether this process runs as root
    pub is_root: bool,
    /// Whether the aoe kernel module appears to be loaded
    pub aoe_module_loaded: bool,
}

impl PrereqReport {
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }
}

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Check if running as root
    pub fn is_root() -> bool {
        #[cfg(unix)]
        {
            unsafe { libc::getuid() == 0 }
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    /// Check that every storage tool is installed
    pub fn check_prerequisites() -> PrereqReport {
        let missing = Self::missing_commands(REQUIRED_COMMANDS);

        let aoe_module_loaded = Path::new("/sys/module/aoe").exists();
        if !aoe_module_loaded {
            warn!("aoe kernel module not loaded - discovery will not find any devices");
        }

        let report = PrereqReport {
            missing,
            is_root: Self::is_root(),
            aoe_module_loaded,
        };
        debug!("Prerequisite report: {:?}", report);
        report
    }

    /// Commands from `commands` that are not in PATH
    pub fn missing_commands(commands: &[&str]) -> Vec<String> {
        commands
            .iter()
            .filter(|cmd| !Self::command_exists(cmd))
            .map(|cmd| cmd.to_string())
            .collect()
    }

    /// Package that provides a required command on Debian/Ubuntu
    pub fn package_for(command: &str) -> Option<&'static str> {
        match command {
            "vgs" | "lvcreate" | "lvremove" => Some("lvm2"),
            "vblade-persist" => Some("vblade-persist"),
            "aoe-discover" | "aoe-stat" => Some("aoetools"),
            _ => None,
        }
    }
}
