// file: src/executor/fake.rs
// version: 1.0.0
// guid: eb0e5313-04e4-4af1-ba8a-f83112a82cdc

//! Logging-only executor

use super::{CommandExecutor, CommandOutput};
use crate::Result;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Records and logs commands instead of running them
#[derive(Debug, Default)]
pub struct FakeExecutor {
    commands: Mutex<Vec<String>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command seen so far, oldest first
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    fn record(&self, command: String) {
        debug!("FAKE AOE: {}", command);

        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command);
        }
    }
}

#[async_trait::async_trait]
impl CommandExecutor for FakeExecutor {
    async fn execute(&self, command: &str, _check_exit_code: bool) -> Result<CommandOutput> {
        self.record(command.to_string());
        Ok(CommandOutput::default())
    }

    /// Logged as the equivalent `sleep` command; returns immediately
    async fn delay(&self, duration: Duration) {
        let command = if duration.subsec_nanos() == 0 {
            format!("sleep {}", duration.as_secs())
        } else {
            format!("sleep {:.3}", duration.as_secs_f64())
        };
        self.record(command);
    }
}
