// file: src/executor/mod.rs
// version: 1.0.0
// guid: 3e05199c-d834-4d36-af1d-c1ec1fe65413

//! Command execution seam used by the volume driver
//!
//! The driver only ever builds command strings; whoever implements
//! [`CommandExecutor`] decides whether they hit a shell or a log.

pub mod fake;
pub mod local;

pub use fake::FakeExecutor;
pub use local::LocalExecutor;

use crate::Result;
use std::time::Duration;

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    /// Whether the command exited with status zero
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait for executing shell commands
#[async_trait::async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute command, failing with a process error on non-zero exit
    /// unless `check_exit_code` is false
    async fn execute(&self, command: &str, check_exit_code: bool) -> Result<CommandOutput>;

    /// Execute command with exit code checking enabled
    async fn run(&self, command: &str) -> Result<CommandOutput> {
        self.execute(command, true).await
    }

    /// Wait before the next command, e.g. for vblade to settle
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
