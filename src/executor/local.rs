// file: src/executor/local.rs
// version: 1.0.0
// guid: 5080807b-2c8c-4e86-92bc-75774b6efde6

//! Local command execution through bash

use super::{CommandExecutor, CommandOutput};
use crate::error::VolumeError;
use crate::Result;
use tokio::process::Command;
use tracing::{debug, error, warn};

/// Executes commands on this machine with `bash -c`
#[derive(Debug, Clone)]
pub struct LocalExecutor {
    shell: String,
}

impl LocalExecutor {
    /// Create a new local executor using bash
    pub fn new() -> Self {
        Self {
            shell: "bash".to_string(),
        }
    }

    /// Create a local executor using a different shell binary
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for LocalExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CommandExecutor for LocalExecutor {
    async fn execute(&self, command: &str, check_exit_code: bool) -> Result<CommandOutput> {
        debug!("Executing local command: {}", command);

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .output()
            .await
            .map_err(|e| VolumeError::ProcessError {
                command: command.to_string(),
                exit_code: None,
                stderr: format!("Failed to execute command: {}", e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        if !output.status.success() {
            if check_exit_code {
                error!("Command '{}' failed with exit code {}", command, exit_code);
                if !stdout.trim().is_empty() {
                    error!("STDOUT: {}", stdout.trim());
                }
                if !stderr.trim().is_empty() {
                    error!("STDERR: {}", stderr.trim());
                }

                return Err(VolumeError::ProcessError {
                    command: command.to_string(),
                    exit_code: output.status.code(),
                    stderr: if stderr.is_empty() { stdout } else { stderr },
                });
            }

            warn!(
                "Command '{}' exited with {} (exit code not checked)",
                command, exit_code
            );
        } else {
            debug!("Command executed successfully: {} bytes of output", stdout.len());
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_captures_stdout() {
        // Arrange
        let executor = LocalExecutor::new();

        // Act
        let output = executor.run("echo hello").await.unwrap();

        // Assert
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn test_execute_failure_is_process_error() {
        // Arrange
        let executor = LocalExecutor::new();

        // Act
        let result = executor.run("echo oops >&2; exit 3").await;

        // Assert
        match result {
            Err(VolumeError::ProcessError {
                command,
                exit_code,
                stderr,
            }) => {
                assert_eq!(command, "echo oops >&2; exit 3");
                assert_eq!(exit_code, Some(3));
                assert_eq!(stderr.trim(), "oops");
            }
            other => panic!("expected process error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_stdout() {
        let executor = LocalExecutor::new();

        let err = executor.run("echo only-stdout; exit 1").await.unwrap_err();

        match err {
            VolumeError::ProcessError { stderr, .. } => assert_eq!(stderr.trim(), "only-stdout"),
            other => panic!("expected process error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unchecked_failure_returns_output() {
        // Arrange
        let executor = LocalExecutor::new();

        // Act
        let output = executor.execute("exit 7", false).await.unwrap();

        // Assert
        assert!(!output.success());
        assert_eq!(output.exit_code, 7);
    }

    #[tokio::test]
    async fn test_missing_shell_is_process_error() {
        let executor = LocalExecutor::with_shell("/nonexistent/shell");

        let err = executor.execute("true", false).await.unwrap_err();

        match err {
            VolumeError::ProcessError { exit_code, .. } => assert_eq!(exit_code, None),
            other => panic!("expected process error, got {:?}", other),
        }
    }
}
