/// Athena query service for partition maintenance
use crate::error::BatchflowError;
use async_trait::async_trait;

#[async_trait]
pub trait QueryService: Send + Sync {
    /// Refreshes the query engine's view of a table's partitions
    async fn repair_partitions(
        &self,
        database: &str,
        table: &str,
        workgroup: &str,
    ) -> Result<(), BatchflowError>;
}

/// Athena query service implementation
pub struct AthenaQueryService {
    client: aws_sdk_athena::Client,
}

impl AthenaQueryService {
    pub fn new(client: aws_sdk_athena::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueryService for AthenaQueryService {
    async fn repair_partitions(
        &self,
        database: &str,
        table: &str,
        workgroup: &str,
    ) -> Result<(), BatchflowError> {
        use aws_sdk_athena::types::QueryExecutionContext;

        let query = format!("MSCK REPAIR TABLE {}.{}", database, table);
        let context = QueryExecutionContext::builder().database(database).build();

        self.client
            .start_query_execution()
            .query_string(query)
            .query_execution_context(context)
            .work_group(workgroup)
            .send()
            .await
            .map_err(|e| {
                BatchflowError::Athena(format!(
                    "Partition repair failed for {}.{}: {}",
                    database, table, e
                ))
            })?;

        tracing::info!("Submitted partition repair for {}.{}", database, table);
        Ok(())
    }
}
