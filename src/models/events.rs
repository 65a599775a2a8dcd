/// Lambda trigger and response types
use serde::{Deserialize, Serialize};

/// Trigger payload - either an S3 object-created notification announcing a
/// manifest, or a direct invocation naming the batch date
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TriggerEvent {
    S3(S3Event), // Try S3 first (most specific)
    Batch(BatchRequest),
}

/// S3 object-created notification
#[derive(Debug, Clone, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records")]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3EventRecord {
    pub s3: S3Info,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Info {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    pub key: String,
    pub size: Option<i64>,
}

/// Direct invocation payload naming the batch to dispatch
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub batch_date: String,
}

/// Payload handed to the local driver script via `--event`
#[derive(Debug, Clone, Serialize)]
pub struct SparkJobPayload {
    #[serde(rename = "INPUT_PATHS")]
    pub input_paths: String,
    pub error_file_bucket: String,
    pub error_file_key: String,
    pub database_name: String,
    pub table_name: String,
    pub athena_workgroup: String,
}

/// Normalized invocation outcome returned to the Lambda caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JobStatus {
    Passed,
    Failed,
}

/// Handler response body: `{"job_status": "Passed"|"Failed"}`
#[derive(Debug, Clone, Serialize)]
pub struct DispatchResponse {
    pub job_status: JobStatus,
}

impl DispatchResponse {
    pub fn passed() -> Self {
        Self {
            job_status: JobStatus::Passed,
        }
    }

    pub fn failed() -> Self {
        Self {
            job_status: JobStatus::Failed,
        }
    }
}
