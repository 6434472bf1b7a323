// file: src/logging/logger.rs
// version: 1.0.0
// guid: 0de21854-ebce-4e9b-b6a8-436bc4fd7607

//! Logger initialization and configuration

use crate::Result;
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// `RUST_LOG` wins over the verbosity flags when set.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::VolumeError::config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}

/// Run a future inside an `operation` span
pub async fn with_async_operation_span<F, Fut, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("operation", name = operation);
    async move { f().await }.instrument(span).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_fails_gracefully() {
        // Only one global subscriber can exist per process, so the second
        // call must report an error instead of panicking.
        let _ = init_logger(false, false);

        let result = init_logger(true, false);

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_with_async_operation_span() {
        // Arrange
        let operation = "create_volume";

        // Act
        let result = with_async_operation_span(operation, || async {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            "done"
        })
        .await;

        // Assert
        assert_eq!(result, "done");
    }
}
