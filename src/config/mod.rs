// file: src/config/mod.rs
// version: 1.0.0
// guid: ab7ff093-0113-49de-ad2b-cd844fd947e7

//! Configuration module for the AoE volume driver
//!
//! Settings come from built-in defaults, an optional YAML file, `AOE_*`
//! environment variables and finally command line flags, in that order.

pub mod loader;

use crate::security::ValidationUtils;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default volume group holding exported volumes
pub const DEFAULT_VOLUME_GROUP: &str = "nova-volumes";
/// Default interface volumes are exported on
pub const DEFAULT_AOE_ETH_DEV: &str = "eth0";
/// Default privilege prefix for storage commands
pub const DEFAULT_ROOT_HELPER: &str = "sudo";
/// Default wait before retrying a flaky vblade command
pub const DEFAULT_RECOVERY_DELAY_SECS: u64 = 2;

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Name for the VG that will contain exported volumes
    pub volume_group: String,
    /// Which device to export the volumes on
    pub aoe_eth_dev: String,
    /// Prefix for privileged commands; empty runs them directly
    pub root_helper: String,
    /// Seconds to wait before recovering from a vblade failure
    pub recovery_delay_secs: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            volume_group: DEFAULT_VOLUME_GROUP.to_string(),
            aoe_eth_dev: DEFAULT_AOE_ETH_DEV.to_string(),
            root_helper: DEFAULT_ROOT_HELPER.to_string(),
            recovery_delay_secs: DEFAULT_RECOVERY_DELAY_SECS,
        }
    }
}

impl DriverConfig {
    /// Validate driver configuration
    pub fn validate(&self) -> crate::Result<()> {
        ValidationUtils::validate_volume_group(&self.volume_group)?;
        ValidationUtils::validate_interface(&self.aoe_eth_dev)?;

        ValidationUtils::validate_root_helper(&self.root_helper)
    }

    /// Recovery delay as a duration
    pub fn recovery_delay(&self) -> Duration {
        Duration::from_secs(self.recovery_delay_secs)
    }

    /// Apply `AOE_*` environment overrides from the given variables
    pub fn apply_env_overrides<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            match key.as_ref() {
                "AOE_VOLUME_GROUP" => self.volume_group = value.into(),
                "AOE_ETH_DEV" => self.aoe_eth_dev = value.into(),
                "AOE_ROOT_HELPER" => self.root_helper = value.into(),
                "AOE_RECOVERY_DELAY_SECS" => {
                    let value: String = value.into();
                    match value.parse::<u64>() {
                        Ok(secs) => self.recovery_delay_secs = secs,
                        Err(_) => tracing::warn!(
                            "Ignoring invalid AOE_RECOVERY_DELAY_SECS value: {}",
                            value
                        ),
                    }
                }
                _ => {}
            }
        }
    }
}
