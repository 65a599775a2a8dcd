/// Shared test infrastructure
pub mod mock_aws;

use batchflow::handlers::dispatch::DispatchContext;
use batchflow::models::BatchflowConfig;
use mock_aws::{MockAlertService, MockJobService, MockQueryService, MockRunner, MockStorage};
use std::sync::Arc;

/// Bundle of mocks plus the context wired over them
pub struct TestHarness {
    pub storage: MockStorage,
    pub jobs: MockJobService,
    pub query: MockQueryService,
    pub alerts: MockAlertService,
    pub runner: MockRunner,
    pub ctx: DispatchContext,
}

impl TestHarness {
    pub fn new(config: BatchflowConfig) -> Self {
        Self::with_runner(config, MockRunner::new())
    }

    pub fn with_runner(config: BatchflowConfig, runner: MockRunner) -> Self {
        Self::build(config, runner, MockQueryService::new())
    }

    pub fn with_query(config: BatchflowConfig, query: MockQueryService) -> Self {
        Self::build(config, MockRunner::new(), query)
    }

    fn build(config: BatchflowConfig, runner: MockRunner, query: MockQueryService) -> Self {
        let storage = MockStorage::new();
        let jobs = MockJobService::new();
        let alerts = MockAlertService::new();

        let ctx = DispatchContext {
            storage: Arc::new(storage.clone()),
            jobs: Arc::new(jobs.clone()),
            query: Arc::new(query.clone()),
            alerts: Arc::new(alerts.clone()),
            runner: Arc::new(runner.clone()),
            config,
        };

        Self {
            storage,
            jobs,
            query,
            alerts,
            runner,
            ctx,
        }
    }
}

/// S3 notification payload naming a manifest object
pub fn s3_trigger_json(bucket: &str, key: &str) -> String {
    format!(
        r#"{{
            "Records": [{{
                "s3": {{
                    "bucket": {{ "name": "{}" }},
                    "object": {{ "key": "{}", "size": 256 }}
                }}
            }}]
        }}"#,
        bucket, key
    )
}
