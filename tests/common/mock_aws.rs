/// Mock AWS services for integration testing
use async_trait::async_trait;
use batchflow::error::BatchflowError;
use batchflow::models::BatchflowConfig;
use batchflow::services::{
    AlertService, JobService, QueryService, ScriptRunner, StorageService,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

fn object_path(bucket: &str, key: &str) -> String {
    format!("{}/{}", bucket, key)
}

/// Mock S3 storage backed by an in-memory map, with optional per-object size
/// overrides for HeadObject
#[derive(Clone, Default)]
pub struct MockStorage {
    pub objects: Arc<Mutex<HashMap<String, String>>>,
    pub sizes: Arc<Mutex<HashMap<String, u64>>>,
    pub deleted: Arc<Mutex<Vec<String>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_object(&self, bucket: &str, key: &str, content: &str) {
        self.objects
            .lock()
            .unwrap()
            .insert(object_path(bucket, key), content.to_string());
    }

    pub fn set_size(&self, bucket: &str, key: &str, size: u64) {
        self.sizes
            .lock()
            .unwrap()
            .insert(object_path(bucket, key), size);
    }

    pub fn get_object(&self, bucket: &str, key: &str) -> Option<String> {
        self.objects
            .lock()
            .unwrap()
            .get(&object_path(bucket, key))
            .cloned()
    }

    pub fn deleted_paths(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageService for MockStorage {
    async fn read_text(&self, bucket: &str, key: &str) -> Result<String, BatchflowError> {
        self.get_object(bucket, key).ok_or_else(|| {
            BatchflowError::Storage(format!("No such object s3://{}/{}", bucket, key))
        })
    }

    async fn read_text_or_empty(&self, bucket: &str, key: &str) -> String {
        self.get_object(bucket, key).unwrap_or_default()
    }

    async fn write_text(
        &self,
        bucket: &str,
        key: &str,
        content: &str,
    ) -> Result<(), BatchflowError> {
        self.put_object(bucket, key, content);
        Ok(())
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), BatchflowError> {
        let path = object_path(bucket, key);
        self.objects.lock().unwrap().remove(&path);
        self.deleted.lock().unwrap().push(path);
        Ok(())
    }

    async fn content_length(&self, bucket: &str, key: &str) -> Result<u64, BatchflowError> {
        let path = object_path(bucket, key);
        if let Some(size) = self.sizes.lock().unwrap().get(&path) {
            return Ok(*size);
        }
        self.get_object(bucket, key)
            .map(|content| content.len() as u64)
            .ok_or_else(|| {
                BatchflowError::Storage(format!("No such object s3://{}/{}", bucket, key))
            })
    }

    async fn download_to_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
    ) -> Result<(), BatchflowError> {
        let content = self.read_text(bucket, key).await?;
        std::fs::write(path, content)
            .map_err(|e| BatchflowError::Storage(format!("Write failed: {}", e)))
    }
}

/// Mock Glue job service recording every submission
#[derive(Clone, Default)]
pub struct MockJobService {
    pub submissions: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

impl MockJobService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<(String, HashMap<String, String>)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobService for MockJobService {
    async fn start_job_run(
        &self,
        job_name: &str,
        arguments: HashMap<String, String>,
    ) -> Result<String, BatchflowError> {
        self.submissions
            .lock()
            .unwrap()
            .push((job_name.to_string(), arguments));
        Ok("jr_mock".to_string())
    }
}

/// Mock Athena query service; can be configured to fail
#[derive(Clone, Default)]
pub struct MockQueryService {
    pub repairs: Arc<Mutex<Vec<(String, String, String)>>>,
    pub fail: bool,
}

impl MockQueryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn repairs(&self) -> Vec<(String, String, String)> {
        self.repairs.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryService for MockQueryService {
    async fn repair_partitions(
        &self,
        database: &str,
        table: &str,
        workgroup: &str,
    ) -> Result<(), BatchflowError> {
        if self.fail {
            return Err(BatchflowError::Athena("mock Athena outage".to_string()));
        }
        self.repairs.lock().unwrap().push((
            database.to_string(),
            table.to_string(),
            workgroup.to_string(),
        ));
        Ok(())
    }
}

/// Mock alert service recording every notification
#[derive(Clone, Default)]
pub struct MockAlertService {
    pub alerts: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAlertService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertService for MockAlertService {
    async fn send_failure_alert(
        &self,
        _source: &str,
        _recipients: &[String],
        job_name: &str,
        error: &str,
    ) -> Result<(), BatchflowError> {
        self.alerts
            .lock()
            .unwrap()
            .push((job_name.to_string(), error.to_string()));
        Ok(())
    }
}

/// Mock script runner recording invocations; can be configured to fail
#[derive(Clone, Default)]
pub struct MockRunner {
    pub invocations: Arc<Mutex<Vec<(String, String)>>>,
    pub fail: bool,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn invocations(&self) -> Vec<(String, String)> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptRunner for MockRunner {
    async fn run(&self, script_path: &Path, event_json: &str) -> Result<(), BatchflowError> {
        self.invocations.lock().unwrap().push((
            script_path.display().to_string(),
            event_json.to_string(),
        ));
        if self.fail {
            return Err(BatchflowError::SparkSubmit(
                "spark-submit exited with status 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Test configuration with the given routing threshold
pub fn test_config(threshold: u64) -> BatchflowConfig {
    BatchflowConfig {
        script_bucket: "lake-scripts".to_string(),
        spark_script: "jobs/ingest.py".to_string(),
        database_name: "lake".to_string(),
        table_name: "events".to_string(),
        athena_workgroup: "primary".to_string(),
        glue_job: "lake-ingest".to_string(),
        data_threshold: threshold,
        alert_source: "alerts@example.com".to_string(),
        alert_recipients: vec!["oncall@example.com".to_string()],
    }
}
