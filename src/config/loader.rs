// file: src/config/loader.rs
// version: 1.0.0
// guid: 1bbd2500-b26c-4250-8d76-e2344267c95e

//! Configuration file loading and environment variable substitution

use super::DriverConfig;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader that sees only the given variables
    pub fn with_env(env_vars: HashMap<String, String>) -> Self {
        Self { env_vars }
    }

    /// Default per-user config file location
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aoe-volumes").join("config.yaml"))
    }

    /// Load driver configuration from a YAML file
    pub fn load_driver_config<P: AsRef<Path>>(&self, path: P) -> Result<DriverConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::VolumeError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let config: DriverConfig = if expanded.trim().is_empty() {
            DriverConfig::default()
        } else {
            serde_yaml::from_str(&expanded)?
        };

        config.validate()?;

        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist; otherwise the user config file is used
    /// when present. `AOE_*` variables are applied on top and the result is
    /// validated.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<DriverConfig> {
        let mut config = match explicit {
            Some(path) => {
                info!("Loading configuration from: {}", path.display());
                self.load_driver_config(path)?
            }
            None => match Self::user_config_path() {
                Some(path) if path.exists() => {
                    info!("Loading user configuration from: {}", path.display());
                    self.load_driver_config(&path)?
                }
                _ => DriverConfig::default(),
            },
        };

        config.apply_env_overrides(self.env_vars.iter().map(|(k, v)| (k.as_str(), v.clone())));
        config.validate()?;

        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    /// Expand environment variables in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            crate::error::VolumeError::config(format!("Invalid regex pattern: {}", e))
        })?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|v| v == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(crate::error::VolumeError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_var_expansion() {
        let mut loader = ConfigLoader::with_env(HashMap::new());
        loader.set_env_var("VG".to_string(), "vg-ssd".to_string());

        let result = loader.expand_env_vars("volume_group: ${VG}").unwrap();
        assert_eq!(result, "volume_group: vg-ssd");
    }

    #[test]
    fn test_missing_env_var() {
        let loader = ConfigLoader::with_env(HashMap::new());

        let result = loader.expand_env_vars("volume_group: ${MISSING_VAR}");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Missing environment variables"));
    }

    #[test]
    fn test_load_driver_config() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
volume_group: cinder-volumes
aoe_eth_dev: eth1
"#
        )
        .unwrap();

        let loader = ConfigLoader::with_env(HashMap::new());
        let config = loader.load_driver_config(file.path())?;

        assert_eq!(config.volume_group, "cinder-volumes");
        assert_eq!(config.aoe_eth_dev, "eth1");
        // unspecified fields keep their defaults
        assert_eq!(config.root_helper, "sudo");
        assert_eq!(config.recovery_delay_secs, 2);

        Ok(())
    }

    #[test]
    fn test_empty_file_yields_defaults() -> Result<()> {
        let file = NamedTempFile::new().unwrap();

        let loader = ConfigLoader::with_env(HashMap::new());
        let config = loader.load_driver_config(file.path())?;

        assert_eq!(config, DriverConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_file_values_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "aoe_eth_dev: \"eth0; reboot\"").unwrap();

        let loader = ConfigLoader::with_env(HashMap::new());
        assert!(loader.load_driver_config(file.path()).is_err());
    }

    #[test]
    fn test_resolve_applies_env_over_file() -> Result<()> {
        // Arrange
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "volume_group: from-file\naoe_eth_dev: eth2").unwrap();
        let mut env = HashMap::new();
        env.insert("AOE_VOLUME_GROUP".to_string(), "from-env".to_string());
        let loader = ConfigLoader::with_env(env);

        // Act
        let config = loader.resolve(Some(file.path()))?;

        // Assert
        assert_eq!(config.volume_group, "from-env");
        assert_eq!(config.aoe_eth_dev, "eth2");
        Ok(())
    }

    #[test]
    fn test_resolve_missing_explicit_file_fails() {
        let loader = ConfigLoader::with_env(HashMap::new());

        let result = loader.resolve(Some(Path::new("/nonexistent/aoe-volumes.yaml")));

        assert!(matches!(
            result,
            Err(crate::error::VolumeError::ConfigError(_))
        ));
    }
}
