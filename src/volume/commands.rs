// file: src/volume/commands.rs
// version: 1.0.0
// guid: 6c3aa11f-0bce-4981-b291-91c47eebc56e

//! Shell command lines for LVM, vblade-persist and aoetools

use crate::config::DriverConfig;

/// Size string handed to `lvcreate -L`; zero means the 100M minimum
pub fn size_string(size_gb: u64) -> String {
    if size_gb == 0 {
        "100M".to_string()
    } else {
        format!("{}G", size_gb)
    }
}

/// Builds command lines from the driver settings
#[derive(Debug, Clone, Copy)]
pub struct CommandBuilder<'a> {
    config: &'a DriverConfig,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(config: &'a DriverConfig) -> Self {
        Self { config }
    }

    fn privileged(&self, command: &str) -> String {
        let helper = self.config.root_helper.trim();
        if helper.is_empty() {
            command.to_string()
        } else {
            format!("{} {}", helper, command)
        }
    }

    /// Fails when the volume group is missing
    pub fn check_volume_group(&self) -> String {
        format!("vgs {}", self.config.volume_group)
    }

    pub fn create_volume(&self, volume_name: &str, size_gb: u64) -> String {
        self.privileged(&format!(
            "lvcreate -L {} -n {} {}",
            size_string(size_gb),
            volume_name,
            self.config.volume_group
        ))
    }

    pub fn delete_volume(&self, volume_name: &str) -> String {
        self.privileged(&format!(
            "lvremove -f {}/{}",
            self.config.volume_group, volume_name
        ))
    }

    pub fn setup_export(&self, volume_name: &str, shelf_id: u32, blade_id: u32) -> String {
        self.privileged(&format!(
            "vblade-persist setup {} {} {} /dev/{}/{}",
            shelf_id, blade_id, self.config.aoe_eth_dev, self.config.volume_group, volume_name
        ))
    }

    pub fn stop_export(&self, shelf_id: u32, blade_id: u32) -> String {
        self.privileged(&format!("vblade-persist stop {} {}", shelf_id, blade_id))
    }

    pub fn destroy_export(&self, shelf_id: u32, blade_id: u32) -> String {
        self.privileged(&format!("vblade-persist destroy {} {}", shelf_id, blade_id))
    }

    pub fn auto_all_exports(&self) -> String {
        self.privileged("vblade-persist auto all")
    }

    pub fn start_all_exports(&self) -> String {
        self.privileged("vblade-persist start all")
    }

    pub fn discover(&self) -> String {
        self.privileged("aoe-discover")
    }

    pub fn status(&self) -> String {
        self.privileged("aoe-stat")
    }
}
