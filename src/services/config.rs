/// Configuration service - loads config from environment variables
use crate::error::BatchflowError;
use crate::models::BatchflowConfig;
use async_trait::async_trait;

#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn get_config(&self) -> Result<BatchflowConfig, BatchflowError>;
}

/// Environment variable-based configuration provider
pub struct EnvConfigProvider {
    config: BatchflowConfig,
}

impl EnvConfigProvider {
    pub fn new() -> Result<Self, BatchflowError> {
        let data_threshold = parse_threshold(&require_var("DATA_THRESHOLD")?)?;

        let alert_recipients = std::env::var("ALERT_RECIPIENTS")
            .unwrap_or_default()
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .collect();

        let config = BatchflowConfig {
            script_bucket: require_var("SCRIPT_BUCKET")?,
            spark_script: require_var("SPARK_SCRIPT")?,
            database_name: require_var("DATABASE_NAME")?,
            table_name: require_var("TABLE_NAME")?,
            athena_workgroup: require_var("ATHENA_WORKGROUP")?,
            glue_job: require_var("GLUE_JOB")?,
            data_threshold,
            alert_source: std::env::var("ALERT_SOURCE").unwrap_or_default(),
            alert_recipients,
        };

        // Validate configuration
        config
            .validate()
            .map_err(|e| BatchflowError::Config(format!("Invalid configuration: {}", e)))?;

        tracing::info!(
            threshold = config.data_threshold,
            glue_job = %config.glue_job,
            "Configuration validated successfully"
        );

        Ok(Self { config })
    }
}

fn require_var(name: &str) -> Result<String, BatchflowError> {
    std::env::var(name).map_err(|_| BatchflowError::Config(format!("Missing {} env var", name)))
}

/// Parses the routing threshold; a non-numeric value is a configuration
/// error at load time, never a runtime comparison surprise
fn parse_threshold(raw: &str) -> Result<u64, BatchflowError> {
    raw.trim().parse().map_err(|_| {
        BatchflowError::Config(format!(
            "DATA_THRESHOLD must be a non-negative integer, got '{}'",
            raw
        ))
    })
}

#[async_trait]
impl ConfigProvider for EnvConfigProvider {
    async fn get_config(&self) -> Result<BatchflowConfig, BatchflowError> {
        // Configuration is immutable during Lambda lifetime
        Ok(self.config.clone())
    }
}
