//! Read/write access to the object stores, behind a trait so the handler
//! can be exercised against an in-memory double.

use crate::errors::{ResizeError, ResizeResult};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use std::time::Duration;
use tracing::debug;

/// The two object-store operations the handler needs, plus the bounded
/// existence poll that papers over the delay between an upload landing and
/// the trigger firing.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Poll until `bucket/key` is visible, checking up to `max_attempts`
    /// times with `delay` between checks. Errors with `SourceUnavailable`
    /// once the budget is spent.
    async fn wait_for_object(
        &self,
        bucket: &str,
        key: &str,
        max_attempts: u32,
        delay: Duration,
    ) -> ResizeResult<()>;

    /// Fetch the full object content into memory.
    async fn get_object(&self, bucket: &str, key: &str) -> ResizeResult<Bytes>;

    /// Write `body` to `bucket/key` with the given content type,
    /// overwriting any existing object.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> ResizeResult<()>;
}

/// S3-backed implementation.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn wait_for_object(
        &self,
        bucket: &str,
        key: &str,
        max_attempts: u32,
        delay: Duration,
    ) -> ResizeResult<()> {
        for attempt in 1..=max_attempts {
            match self.client.head_object().bucket(bucket).key(key).send().await {
                Ok(_) => return Ok(()),
                Err(err) => {
                    let not_found = err
                        .as_service_error()
                        .map(|service_err| service_err.is_not_found())
                        .unwrap_or(false);
                    if !not_found {
                        return Err(ResizeError::ObjectStore(format!(
                            "head {}/{}: {}",
                            bucket, key, err
                        )));
                    }
                    debug!(bucket, key, attempt, "object not visible yet");
                }
            }
            if attempt < max_attempts {
                tokio::time::sleep(delay).await;
            }
        }
        Err(ResizeError::SourceUnavailable {
            bucket: bucket.to_string(),
            key: key.to_string(),
            attempts: max_attempts,
        })
    }

    async fn get_object(&self, bucket: &str, key: &str) -> ResizeResult<Bytes> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                ResizeError::ObjectStore(format!("get {}/{}: {}", bucket, key, err))
            })?;
        let aggregated = output.body.collect().await.map_err(|err| {
            ResizeError::ObjectStore(format!("read body of {}/{}: {}", bucket, key, err))
        })?;
        Ok(aggregated.into_bytes())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> ResizeResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|err| {
                ResizeError::ObjectStore(format!("put {}/{}: {}", bucket, key, err))
            })?;
        Ok(())
    }
}
