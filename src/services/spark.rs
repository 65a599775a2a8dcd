/// Local spark-submit execution service
use crate::constants::SPARK_SUBMIT_BIN;
use crate::error::BatchflowError;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Runs a local driver script, passing the serialized job payload via
    /// `--event`. Blocks until the process exits; nonzero exit is an error.
    async fn run(&self, script_path: &Path, event_json: &str) -> Result<(), BatchflowError>;
}

/// spark-submit subprocess runner
pub struct SparkSubmitRunner;

impl SparkSubmitRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SparkSubmitRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScriptRunner for SparkSubmitRunner {
    async fn run(&self, script_path: &Path, event_json: &str) -> Result<(), BatchflowError> {
        tracing::info!("Running {} {}", SPARK_SUBMIT_BIN, script_path.display());

        let status = tokio::process::Command::new(SPARK_SUBMIT_BIN)
            .arg(script_path)
            .arg("--event")
            .arg(event_json)
            .status()
            .await
            .map_err(|e| {
                BatchflowError::SparkSubmit(format!("Failed to spawn {}: {}", SPARK_SUBMIT_BIN, e))
            })?;

        if !status.success() {
            return Err(BatchflowError::SparkSubmit(format!(
                "{} exited with status {}",
                SPARK_SUBMIT_BIN, status
            )));
        }

        tracing::info!("Script {} finished successfully", script_path.display());
        Ok(())
    }
}
