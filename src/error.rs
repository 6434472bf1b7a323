// file: src/error.rs
// version: 1.0.0
// guid: 1ad56b33-5601-4fc3-885d-782c3bcb6354

//! Error types for the AoE volume driver

use thiserror::Error;

/// Result type alias for the driver
pub type Result<T> = std::result::Result<T, VolumeError>;

/// Error types for volume and export management
#[derive(Error, Debug)]
pub enum VolumeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Command '{command}' failed with {}: {stderr}", describe_exit(.exit_code))]
    ProcessError {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Human wording for a process exit status
fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (killed by signal or failed to start)".to_string(),
    }
}

impl VolumeError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// True when a command ran (or failed to spawn) and did not succeed
    pub fn is_process_error(&self) -> bool {
        matches!(self, Self::ProcessError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_display() {
        let err = VolumeError::ProcessError {
            command: "sudo lvremove -f nova-volumes/v1".to_string(),
            exit_code: Some(5),
            stderr: "volume not found".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("sudo lvremove -f nova-volumes/v1"));
        assert!(msg.contains("failed with exit code 5:"));
        assert!(!msg.contains("Some("));
        assert!(msg.contains("volume not found"));
        assert!(err.is_process_error());
    }

    #[test]
    fn test_process_error_display_without_exit_code() {
        let err = VolumeError::ProcessError {
            command: "sudo aoe-stat".to_string(),
            exit_code: None,
            stderr: "Failed to execute command".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("no exit code"));
        assert!(!msg.contains("None"));
    }

    #[test]
    fn test_other_errors_are_not_process_errors() {
        assert!(!VolumeError::config("bad").is_process_error());
        assert!(!VolumeError::validation("bad").is_process_error());
    }
}
