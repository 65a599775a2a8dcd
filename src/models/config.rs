/// Configuration models
use serde::{Deserialize, Serialize};

/// Dispatcher configuration, loaded once per Lambda lifetime
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchflowConfig {
    /// Bucket holding the Spark driver script
    pub script_bucket: String,
    /// Key of the Spark driver script within `script_bucket`
    pub spark_script: String,
    /// Glue catalog database the batch lands in
    pub database_name: String,
    /// Table whose partitions are repaired after a local run
    pub table_name: String,
    /// Athena workgroup for the partition repair query
    pub athena_workgroup: String,
    /// Glue job name for the managed submission path
    pub glue_job: String,
    /// Total manifest size in bytes at or above which the batch goes to Glue
    pub data_threshold: u64,
    /// SES alert sender; alerting is disabled when recipients are empty
    #[serde(default)]
    pub alert_source: String,
    #[serde(default)]
    pub alert_recipients: Vec<String>,
}

impl BatchflowConfig {
    /// Validates configuration is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.script_bucket.is_empty() {
            return Err("Script bucket not configured".to_string());
        }

        if self.spark_script.is_empty() {
            return Err("Spark script key not configured".to_string());
        }

        if self.glue_job.is_empty() {
            return Err("Glue job name not configured".to_string());
        }

        if self.database_name.is_empty() || self.table_name.is_empty() {
            return Err("Database/table for partition repair not configured".to_string());
        }

        if self.athena_workgroup.is_empty() {
            return Err("Athena workgroup not configured".to_string());
        }

        // Alerting is optional, but a recipient list without a source is a
        // misconfiguration
        if !self.alert_recipients.is_empty() && self.alert_source.is_empty() {
            return Err("Alert recipients configured without an alert source".to_string());
        }

        Ok(())
    }

    /// Whether failure alerts should be sent
    pub fn alerting_enabled(&self) -> bool {
        !self.alert_recipients.is_empty()
    }
}
