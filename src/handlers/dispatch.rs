/// Batch dispatch pipeline - manifest assembly, size routing, submission,
/// and error-marker bookkeeping
use crate::constants::{GLUE_INPUT_PATHS_ARG, LOCAL_SCRIPT_PATH};
use crate::error::BatchflowError;
use crate::models::{
    BatchflowConfig, Manifest, SparkJobPayload, TriggerEvent, error_marker_key,
    manifest_key_for_batch_date,
};
use crate::routing::{RouteDecision, SizeEvaluator, SizeRouter};
use crate::services::alerts::SesAlertService;
use crate::services::athena::AthenaQueryService;
use crate::services::config::{ConfigProvider, EnvConfigProvider};
use crate::services::glue::GlueJobService;
use crate::services::s3::S3StorageService;
use crate::services::spark::SparkSubmitRunner;
use crate::services::{AlertService, JobService, QueryService, ScriptRunner, StorageService};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Dispatch handler context
pub struct DispatchContext {
    pub storage: Arc<dyn StorageService>,
    pub jobs: Arc<dyn JobService>,
    pub query: Arc<dyn QueryService>,
    pub alerts: Arc<dyn AlertService>,
    pub runner: Arc<dyn ScriptRunner>,
    pub config: BatchflowConfig,
}

impl DispatchContext {
    pub async fn new() -> Result<Self, BatchflowError> {
        let aws_config = aws_config::load_from_env().await;

        let s3_client = aws_sdk_s3::Client::new(&aws_config);
        let glue_client = aws_sdk_glue::Client::new(&aws_config);
        let athena_client = aws_sdk_athena::Client::new(&aws_config);
        let ses_client = aws_sdk_ses::Client::new(&aws_config);

        let env_config = EnvConfigProvider::new()?;
        let config = env_config.get_config().await?;

        Ok(Self {
            storage: Arc::new(S3StorageService::new(s3_client)),
            jobs: Arc::new(GlueJobService::new(glue_client)),
            query: Arc::new(AthenaQueryService::new(athena_client)),
            alerts: Arc::new(SesAlertService::new(ses_client)),
            runner: Arc::new(SparkSubmitRunner::new()),
            config,
        })
    }
}

/// Resolves the manifest location announced by the trigger
fn manifest_location(
    ctx: &DispatchContext,
    event: &TriggerEvent,
) -> Result<(String, String), BatchflowError> {
    match event {
        TriggerEvent::S3(s3_event) => {
            let record = s3_event.records.first().ok_or_else(|| {
                BatchflowError::Event("S3 event contains no records".to_string())
            })?;
            Ok((
                record.s3.bucket.name.clone(),
                record.s3.object.key.clone(),
            ))
        }
        TriggerEvent::Batch(request) => Ok((
            ctx.config.script_bucket.clone(),
            manifest_key_for_batch_date(&request.batch_date),
        )),
    }
}

#[tracing::instrument(name = "dispatch.process_event", skip(ctx, event))]
pub async fn process_event(
    ctx: &DispatchContext,
    event: TriggerEvent,
) -> Result<(), BatchflowError> {
    let (manifest_bucket, manifest_key) = manifest_location(ctx, &event)?;
    let marker_key = error_marker_key(&manifest_key);

    info!(
        "Dispatching batch from manifest s3://{}/{}",
        manifest_bucket, manifest_key
    );

    // 1. Assemble the effective manifest: fresh entries plus any backlog
    //    recorded by a previously failed run
    let fresh = ctx.storage.read_text(&manifest_bucket, &manifest_key).await?;
    let backlog = ctx
        .storage
        .read_text_or_empty(&manifest_bucket, &marker_key)
        .await;
    let manifest = Manifest::assemble(&fresh, &backlog);
    info!("Final list of unprocessed files: {}", manifest);

    // 2. Sum the byte sizes of every referenced object
    let evaluator = SizeEvaluator::new(Arc::clone(&ctx.storage));
    let total_size = evaluator.total_size(&manifest).await?;
    info!("Total size of unprocessed files: {} bytes", total_size);

    // 3. Pick the submission path
    let router = SizeRouter::new(ctx.config.data_threshold);
    match router.decide(total_size) {
        RouteDecision::ManagedJob => submit_glue(ctx, &manifest).await,
        RouteDecision::LocalScript => {
            submit_local(ctx, &manifest, &manifest_bucket, &marker_key).await
        }
    }
}

/// Starts the configured Glue job with the manifest as a job argument
async fn submit_glue(ctx: &DispatchContext, manifest: &Manifest) -> Result<(), BatchflowError> {
    let arguments = HashMap::from([(
        GLUE_INPUT_PATHS_ARG.to_string(),
        manifest.as_str().to_string(),
    )]);

    let run_id = ctx
        .jobs
        .start_job_run(&ctx.config.glue_job, arguments)
        .await?;
    info!("Glue job run started: {}", run_id);
    Ok(())
}

/// Downloads the driver script and runs it via spark-submit. On failure the
/// manifest is persisted to the error marker so the next trigger retries it;
/// on success the marker is removed and partitions are repaired.
async fn submit_local(
    ctx: &DispatchContext,
    manifest: &Manifest,
    marker_bucket: &str,
    marker_key: &str,
) -> Result<(), BatchflowError> {
    let script_path = Path::new(LOCAL_SCRIPT_PATH);
    ctx.storage
        .download_to_file(&ctx.config.script_bucket, &ctx.config.spark_script, script_path)
        .await?;

    let payload = SparkJobPayload {
        input_paths: manifest.as_str().to_string(),
        error_file_bucket: marker_bucket.to_string(),
        error_file_key: marker_key.to_string(),
        database_name: ctx.config.database_name.clone(),
        table_name: ctx.config.table_name.clone(),
        athena_workgroup: ctx.config.athena_workgroup.clone(),
    };
    let payload_json = serde_json::to_string(&payload)
        .map_err(|e| BatchflowError::SparkSubmit(format!("Failed to serialize payload: {}", e)))?;

    if let Err(e) = ctx.runner.run(script_path, &payload_json).await {
        // Persist the active manifest so the next trigger picks it back up
        if let Err(write_err) = ctx
            .storage
            .write_text(marker_bucket, marker_key, manifest.as_str())
            .await
        {
            warn!(
                "Failed to record error marker s3://{}/{}: {}",
                marker_bucket, marker_key, write_err
            );
        }
        return Err(e);
    }

    // Bookkeeping after a successful run is best effort
    if let Err(e) = ctx.storage.delete(marker_bucket, marker_key).await {
        warn!(
            "Failed to delete error marker s3://{}/{}: {}",
            marker_bucket, marker_key, e
        );
    }

    if let Err(e) = ctx
        .query
        .repair_partitions(
            &ctx.config.database_name,
            &ctx.config.table_name,
            &ctx.config.athena_workgroup,
        )
        .await
    {
        warn!("Partition repair did not complete: {}", e);
    }

    Ok(())
}
