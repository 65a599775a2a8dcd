/// Glue job submission service
use crate::error::BatchflowError;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait JobService: Send + Sync {
    /// Starts a named job run with string arguments, returning the run id
    async fn start_job_run(
        &self,
        job_name: &str,
        arguments: HashMap<String, String>,
    ) -> Result<String, BatchflowError>;
}

/// Glue job service implementation
pub struct GlueJobService {
    client: aws_sdk_glue::Client,
}

impl GlueJobService {
    pub fn new(client: aws_sdk_glue::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobService for GlueJobService {
    async fn start_job_run(
        &self,
        job_name: &str,
        arguments: HashMap<String, String>,
    ) -> Result<String, BatchflowError> {
        let response = self
            .client
            .start_job_run()
            .job_name(job_name)
            .set_arguments(Some(arguments))
            .send()
            .await
            .map_err(|e| {
                BatchflowError::Glue(format!("Failed to start job run for '{}': {}", job_name, e))
            })?;

        let run_id = response.job_run_id().unwrap_or_default().to_string();

        tracing::info!("Started Glue job '{}' (run id: {})", job_name, run_id);
        Ok(run_id)
    }
}
