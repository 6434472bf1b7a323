// file: src/volume/driver.rs
// version: 1.0.0
// guid: 85310aac-ba3b-42a0-8be9-66e8684da866

//! AoE volume driver

use super::commands::CommandBuilder;
use crate::config::DriverConfig;
use crate::executor::{CommandExecutor, FakeExecutor};
use crate::security::ValidationUtils;
use crate::Result;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Creates LVM volumes and exports them with vblade-persist
pub struct AoeDriver<E: CommandExecutor> {
    config: DriverConfig,
    executor: E,
}

impl AoeDriver<FakeExecutor> {
    /// Driver that logs every command instead of executing it
    pub fn fake(config: DriverConfig) -> Self {
        Self::new(config, FakeExecutor::new())
    }
}

impl<E: CommandExecutor> AoeDriver<E> {
    pub fn new(config: DriverConfig, executor: E) -> Self {
        Self { config, executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn commands(&self) -> CommandBuilder<'_> {
        CommandBuilder::new(&self.config)
    }

    fn recovery_delay(&self) -> Duration {
        self.config.recovery_delay()
    }

    /// Creates a logical volume of `size_gb` gigabytes (0 gives 100M)
    pub async fn create_volume(&self, volume_name: &str, size_gb: u64) -> Result<()> {
        ValidationUtils::validate_volume_name(volume_name)?;
        info!("Creating volume {} ({})", volume_name, super::size_string(size_gb));

        // make sure the volume group exists
        self.executor.run(&self.commands().check_volume_group()).await?;
        self.executor
            .run(&self.commands().create_volume(volume_name, size_gb))
            .await?;

        Ok(())
    }

    /// Deletes a logical volume
    pub async fn delete_volume(&self, volume_name: &str) -> Result<()> {
        ValidationUtils::validate_volume_name(volume_name)?;
        info!("Deleting volume {}", volume_name);

        self.executor
            .run(&self.commands().delete_volume(volume_name))
            .await?;
        Ok(())
    }

    /// Creates a persistent export for a logical volume
    pub async fn create_export(&self, volume_name: &str, shelf_id: u32, blade_id: u32) -> Result<()> {
        ValidationUtils::validate_volume_name(volume_name)?;
        info!(
            "Exporting volume {} as e{}.{} on {}",
            volume_name, shelf_id, blade_id, self.config.aoe_eth_dev
        );

        self.executor
            .run(&self.commands().setup_export(volume_name, shelf_id, blade_id))
            .await?;
        Ok(())
    }

    /// Discovers exported volumes on this host and returns the `aoe-stat` listing
    pub async fn discover_volume(&self, volume_name: &str) -> Result<String> {
        ValidationUtils::validate_volume_name(volume_name)?;
        info!("Discovering AoE devices for volume {}", volume_name);

        self.executor.run(&self.commands().discover()).await?;
        let status = self.executor.run(&self.commands().status()).await?;

        Ok(status.stdout)
    }

    /// Removes the export for a logical volume.
    ///
    /// vblade-persist can partially fail; running the same command again
    /// usually finishes the job even though it reports an error again, so a
    /// failed step is retried once and the retry's outcome ignored.
    pub async fn remove_export(&self, volume_name: &str, shelf_id: u32, blade_id: u32) -> Result<()> {
        ValidationUtils::validate_volume_name(volume_name)?;
        info!(
            "Removing export e{}.{} of volume {}",
            shelf_id, blade_id, volume_name
        );

        self.run_with_recovery("vblade stop", &self.commands().stop_export(shelf_id, blade_id))
            .await?;
        self.run_with_recovery(
            "vblade destroy",
            &self.commands().destroy_export(shelf_id, blade_id),
        )
        .await?;

        Ok(())
    }

    /// Re-runs every persisted export, e.g. after a reboot
    pub async fn ensure_exports(&self) {
        info!("Ensuring all AoE exports are running");

        // wait for blades to appear
        self.executor.delay(self.recovery_delay()).await;

        self.run_unchecked(&self.commands().auto_all_exports()).await;
        self.run_unchecked(&self.commands().start_all_exports()).await;
    }

    async fn run_with_recovery(&self, step: &str, command: &str) -> Result<()> {
        match self.executor.run(command).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_process_error() => {
                error!("{} threw an error, recovering: {}", step, e);
                self.executor.delay(self.recovery_delay()).await;
                self.run_unchecked(command).await;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn run_unchecked(&self, command: &str) {
        match self.executor.execute(command, false).await {
            Ok(output) if !output.success() => {
                debug!("Ignoring exit code {} from '{}'", output.exit_code, command)
            }
            Ok(_) => {}
            Err(e) => warn!("Ignoring failure of '{}': {}", command, e),
        }
    }
}
