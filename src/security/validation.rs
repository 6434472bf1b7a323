// file: src/security/validation.rs
// version: 1.0.0
// guid: e482cab8-deac-4ba9-b08c-35e591e95280

//! Input validation for values interpolated into shell commands

use crate::Result;

/// Utility functions for input validation
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate a logical volume name
    pub fn validate_volume_name(name: &str) -> Result<()> {
        Self::validate_token("Volume name", name, |c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
        })?;

        // lvcreate refuses these outright
        if name == "." || name == ".." {
            return Err(crate::error::VolumeError::validation(format!(
                "Volume name cannot be '{}'",
                name
            )));
        }

        Ok(())
    }

    /// Validate a volume group name
    pub fn validate_volume_group(name: &str) -> Result<()> {
        Self::validate_token("Volume group", name, |c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
        })
    }

    /// Validate a network interface name such as `eth0` or `eth0:1`
    pub fn validate_interface(name: &str) -> Result<()> {
        Self::validate_token("Network device", name, |c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | ':')
        })?;

        if name.len() > 15 {
            return Err(crate::error::VolumeError::validation(format!(
                "Network device name cannot exceed 15 characters: {}",
                name
            )));
        }

        Ok(())
    }

    /// Validate a privilege prefix such as `sudo` or `sudo -n`.
    ///
    /// Empty is allowed and means commands run unprefixed. Every
    /// whitespace-separated token must be a plain word.
    pub fn validate_root_helper(helper: &str) -> Result<()> {
        for (i, token) in helper.split_whitespace().enumerate() {
            if i == 0 {
                Self::validate_token("Root helper", token, |c| {
                    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-' | '/')
                })?;
            } else if !token.chars().all(|c| {
                c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-' | '/' | '=' | ':' | ',')
            }) {
                return Err(crate::error::VolumeError::validation(format!(
                    "Root helper argument contains invalid characters: {}",
                    token
                )));
            }
        }

        Ok(())
    }

    fn validate_token(what: &str, value: &str, allowed: impl Fn(char) -> bool) -> Result<()> {
        if value.is_empty() {
            return Err(crate::error::VolumeError::validation(format!(
                "{} cannot be empty",
                what
            )));
        }

        if !value.chars().all(allowed) {
            return Err(crate::error::VolumeError::validation(format!(
                "{} contains invalid characters: {}",
                what, value
            )));
        }

        if value.starts_with('-') {
            return Err(crate::error::VolumeError::validation(format!(
                "{} cannot start with hyphen: {}",
                what, value
            )));
        }

        Ok(())
    }
}
