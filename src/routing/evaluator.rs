/// Size evaluation - sums the stored byte size of every manifest entry
use crate::error::BatchflowError;
use crate::models::Manifest;
use crate::services::StorageService;
use std::sync::Arc;

pub struct SizeEvaluator {
    storage: Arc<dyn StorageService>,
}

impl SizeEvaluator {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    /// Queries the content length of each referenced object and returns the
    /// sum. A missing object or malformed path fails the evaluation.
    pub async fn total_size(&self, manifest: &Manifest) -> Result<u64, BatchflowError> {
        let mut total = 0u64;

        for location in manifest.locations()? {
            let size = self
                .storage
                .content_length(&location.bucket, &location.key)
                .await?;

            tracing::info!(
                bucket = %location.bucket,
                key = %location.key,
                size = size,
                "Sized unprocessed file"
            );

            total += size;
        }

        Ok(total)
    }
}
