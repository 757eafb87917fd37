use async_trait::async_trait;
use std::fmt::Debug;

pub mod s3;

/// Object storage as consumed by the pipeline: existence probes, bucket
/// creation, and keyed writes. Probes return `Ok(false)` for "not found";
/// any other failure category is an `Err` and is treated as a probe
/// failure by the caller.
#[async_trait]
pub trait ObjectStore: Send + Sync + Debug {
    async fn bucket_exists(&self, bucket: &str) -> anyhow::Result<bool>;

    async fn create_bucket(&self, bucket: &str) -> anyhow::Result<()>;

    async fn object_exists(&self, bucket: &str, key: &str) -> anyhow::Result<bool>;

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> anyhow::Result<()>;
}
