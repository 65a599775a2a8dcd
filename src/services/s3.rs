/// S3 storage service
use crate::error::BatchflowError;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Reads an object and decodes it as UTF-8. Missing objects are an error.
    async fn read_text(&self, bucket: &str, key: &str) -> Result<String, BatchflowError>;
    /// Reads an object, returning an empty string when it is missing or
    /// unreadable. Used for the error marker backlog.
    async fn read_text_or_empty(&self, bucket: &str, key: &str) -> String;
    async fn write_text(
        &self,
        bucket: &str,
        key: &str,
        content: &str,
    ) -> Result<(), BatchflowError>;
    async fn delete(&self, bucket: &str, key: &str) -> Result<(), BatchflowError>;
    /// Returns the stored byte size of an object
    async fn content_length(&self, bucket: &str, key: &str) -> Result<u64, BatchflowError>;
    /// Downloads an object to a local file path
    async fn download_to_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
    ) -> Result<(), BatchflowError>;
}

/// S3 storage service implementation
pub struct S3StorageService {
    client: aws_sdk_s3::Client,
}

impl S3StorageService {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    async fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>, BatchflowError> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| BatchflowError::Storage(format!("S3 download failed: {}", e)))?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| BatchflowError::Storage(format!("Failed to read S3 object body: {}", e)))?
            .into_bytes()
            .to_vec();

        tracing::info!(
            "Downloaded from s3://{}/{} ({} bytes)",
            bucket,
            key,
            data.len()
        );
        Ok(data)
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn read_text(&self, bucket: &str, key: &str) -> Result<String, BatchflowError> {
        let data = self.download(bucket, key).await?;
        String::from_utf8(data)
            .map_err(|e| BatchflowError::Storage(format!("Object s3://{}/{} is not UTF-8: {}", bucket, key, e)))
    }

    async fn read_text_or_empty(&self, bucket: &str, key: &str) -> String {
        match self.read_text(bucket, key).await {
            Ok(content) => content,
            Err(e) => {
                tracing::info!("No readable content at s3://{}/{}: {}", bucket, key, e);
                String::new()
            }
        }
    }

    async fn write_text(
        &self,
        bucket: &str,
        key: &str,
        content: &str,
    ) -> Result<(), BatchflowError> {
        use aws_sdk_s3::primitives::ByteStream;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(content.as_bytes().to_vec()))
            .send()
            .await
            .map_err(|e| BatchflowError::Storage(format!("S3 upload failed: {}", e)))?;

        tracing::info!("Uploaded to s3://{}/{}", bucket, key);
        Ok(())
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), BatchflowError> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| BatchflowError::Storage(format!("S3 delete failed: {}", e)))?;

        tracing::info!("Deleted s3://{}/{}", bucket, key);
        Ok(())
    }

    async fn content_length(&self, bucket: &str, key: &str) -> Result<u64, BatchflowError> {
        let response = self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| BatchflowError::Storage(format!("S3 head failed for s3://{}/{}: {}", bucket, key, e)))?;

        let size = response.content_length().unwrap_or(0);
        u64::try_from(size).map_err(|_| {
            BatchflowError::Storage(format!(
                "Negative content length for s3://{}/{}",
                bucket, key
            ))
        })
    }

    async fn download_to_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
    ) -> Result<(), BatchflowError> {
        let data = self.download(bucket, key).await?;
        tokio::fs::write(path, &data).await.map_err(|e| {
            BatchflowError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::info!("Saved s3://{}/{} to {}", bucket, key, path.display());
        Ok(())
    }
}
