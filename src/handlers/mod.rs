/// Lambda event handlers
pub mod dispatch;

use crate::error::BatchflowError;
use crate::models::{DispatchResponse, TriggerEvent};
use crate::services::AlertService;
use dispatch::DispatchContext;
use lambda_runtime::{Error, LambdaEvent as RuntimeEvent};
use serde_json::Value;
use tracing::{error, info};

/// Main Lambda handler - normalizes every outcome into
/// `{"job_status": "Passed"|"Failed"}`
pub async fn handler(event: RuntimeEvent<Value>) -> Result<Value, Error> {
    info!("Received Lambda event");

    let trigger: TriggerEvent = match serde_json::from_value(event.payload.clone()) {
        Ok(trigger) => trigger,
        Err(e) => {
            error!("Failed to parse trigger event: {}", e);
            return Ok(serde_json::to_value(DispatchResponse::failed())?);
        }
    };

    let ctx = match DispatchContext::new().await {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Failed to initialize dispatch context: {}", e);
            return Ok(serde_json::to_value(DispatchResponse::failed())?);
        }
    };

    Ok(serde_json::to_value(run_dispatch(&ctx, trigger).await)?)
}

/// Runs the dispatch pipeline and folds the outcome into a status response,
/// raising a failure alert on the error path
pub async fn run_dispatch(ctx: &DispatchContext, trigger: TriggerEvent) -> DispatchResponse {
    match dispatch::process_event(ctx, trigger).await {
        Ok(()) => DispatchResponse::passed(),
        Err(e) => {
            error!("Batch dispatch failed: {}", e);
            raise_alert(ctx, &e).await;
            DispatchResponse::failed()
        }
    }
}

/// Sends the failure alert; never propagates alerting errors
async fn raise_alert(ctx: &DispatchContext, cause: &BatchflowError) {
    if !ctx.config.alerting_enabled() {
        return;
    }

    if let Err(e) = ctx
        .alerts
        .send_failure_alert(
            &ctx.config.alert_source,
            &ctx.config.alert_recipients,
            &ctx.config.table_name,
            &cause.to_string(),
        )
        .await
    {
        error!("Failed to raise alert: {}", e);
    }
}
