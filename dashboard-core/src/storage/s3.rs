use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;

use super::ObjectStore;

/// [`ObjectStore`] backed by S3. Probe results are classified via the
/// service error's not-found category; everything else propagates.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) => {
                let service = err.into_service_error();
                if service.is_not_found() {
                    Ok(false)
                } else {
                    Err(anyhow::Error::from(service)
                        .context(format!("Failed to probe bucket '{bucket}'")))
                }
            }
        }
    }

    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        // Simple creation, no location constraint.
        self.client
            .create_bucket()
            .bucket(bucket)
            .send()
            .await
            .map(|_| ())
            .with_context(|| format!("Failed to create bucket '{bucket}'"))
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool> {
        match self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) => {
                let service = err.into_service_error();
                if service.is_not_found() {
                    Ok(false)
                } else {
                    Err(anyhow::Error::from(service)
                        .context(format!("Failed to probe object '{key}' in '{bucket}'")))
                }
            }
        }
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map(|_| ())
            .with_context(|| format!("Failed to write object '{key}' to '{bucket}'"))
    }
}
