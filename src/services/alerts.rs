/// SES failure alerting service
use crate::constants::ALERT_CHARSET;
use crate::error::BatchflowError;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
pub trait AlertService: Send + Sync {
    /// Sends a plain-text failure notification
    async fn send_failure_alert(
        &self,
        source: &str,
        recipients: &[String],
        job_name: &str,
        error: &str,
    ) -> Result<(), BatchflowError>;
}

/// SES alert service implementation
pub struct SesAlertService {
    client: aws_sdk_ses::Client,
}

impl SesAlertService {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AlertService for SesAlertService {
    async fn send_failure_alert(
        &self,
        source: &str,
        recipients: &[String],
        job_name: &str,
        error: &str,
    ) -> Result<(), BatchflowError> {
        use aws_sdk_ses::types::{Body, Content, Destination, Message};

        let timestamp = Utc::now().to_rfc3339();

        let subject = Content::builder()
            .charset(ALERT_CHARSET)
            .data(format!("Error: {} processing {}", job_name, timestamp))
            .build()
            .map_err(|e| BatchflowError::Alert(format!("Failed to build subject: {}", e)))?;

        let body_text = Content::builder()
            .charset(ALERT_CHARSET)
            .data(format!(
                "Error dispatching {} batch\n{}",
                job_name, error
            ))
            .build()
            .map_err(|e| BatchflowError::Alert(format!("Failed to build body: {}", e)))?;

        let message = Message::builder()
            .subject(subject)
            .body(Body::builder().text(body_text).build())
            .build();

        let destination = Destination::builder()
            .set_to_addresses(Some(recipients.to_vec()))
            .build();

        let response = self
            .client
            .send_email()
            .source(source)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(|e| BatchflowError::Alert(format!("SES send_email failed: {}", e)))?;

        tracing::info!(
            "Sent failure alert via SES: {} (to: {})",
            response.message_id(),
            recipients.join(", ")
        );
        Ok(())
    }
}
