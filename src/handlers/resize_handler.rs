//! The event handler: everything that happens between an object-created
//! event arriving and the notification going out.

use crate::config::{AppConfig, VOLUME_THRESHOLD, VOLUME_WINDOW};
use crate::errors::ResizeResult;
use crate::models::{HandlerResponse, Notification, ResizeRecord};
use crate::services::{Notifier, ObjectStore, ResizeLog, thumbnail};
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{error, info};

/// Per-invocation pipeline over the three backing services.
///
/// Constructed once at cold start with the resolved configuration; each
/// invocation runs the full sequence: wait for the source object, fetch,
/// resize, upload, record, count the trailing window, notify.
pub struct ResizeHandler {
    config: AppConfig,
    store: Arc<dyn ObjectStore>,
    log: Arc<dyn ResizeLog>,
    notifier: Arc<dyn Notifier>,
}

impl ResizeHandler {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn ObjectStore>,
        log: Arc<dyn ResizeLog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            store,
            log,
            notifier,
        }
    }

    /// Handle one object-created event.
    ///
    /// A payload that cannot be read at all (no records, missing bucket or
    /// key) errors out of the handler itself and is left to the runtime's
    /// own failure path. Everything past that point is caught and turned
    /// into a status-500 result naming the object key; this function never
    /// raises once the key is known.
    pub async fn handle(&self, event: LambdaEvent<S3Event>) -> Result<HandlerResponse, Error> {
        let (event, context) = event.into_parts();

        let record = event
            .records
            .into_iter()
            .next()
            .ok_or("event contained no records")?;
        let source_bucket = record
            .s3
            .bucket
            .name
            .ok_or("event record is missing the bucket name")?;
        let raw_key = record
            .s3
            .object
            .key
            .ok_or("event record is missing the object key")?;
        let object_key = decode_object_key(&raw_key)?;

        info!(
            source_bucket,
            target_bucket = %self.config.target_bucket,
            object_key,
            "received object-created event"
        );
        info!(
            request_id = %context.request_id,
            log_stream = %context.env_config.log_stream,
            log_group = %context.env_config.log_group,
            memory_limit_mb = context.env_config.memory,
            "invocation context"
        );

        match self.process(&source_bucket, &object_key).await {
            Ok(body) => Ok(HandlerResponse::ok(body)),
            Err(err) => {
                error!(object_key, %err, "resize failed");
                Ok(HandlerResponse::error(format!(
                    "Error processing object {}: {}",
                    object_key, err
                )))
            }
        }
    }

    async fn process(&self, source_bucket: &str, object_key: &str) -> ResizeResult<String> {
        info!("waiting for the source object to become visible");
        self.store
            .wait_for_object(
                source_bucket,
                object_key,
                self.config.wait_max_attempts,
                self.config.wait_delay,
            )
            .await?;

        let content = self.store.get_object(source_bucket, object_key).await?;

        let (thumb, format) = thumbnail::make_thumbnail(&content)?;
        let content_type = thumbnail::content_type(format);
        info!(?format, content_type, size = thumb.len(), "resized image");

        self.store
            .put_object(
                &self.config.target_bucket,
                object_key,
                thumb.into(),
                content_type,
            )
            .await?;
        info!("upload completed");

        let resize_record = ResizeRecord::now(object_key);
        self.log.append(&resize_record).await?;

        let cutoff = resize_record.timestamp - VOLUME_WINDOW.as_secs() as i64;
        let count = self.log.count_since(cutoff).await?;
        info!(count, "resizes inside the trailing window");

        if count > VOLUME_THRESHOLD {
            self.notifier
                .publish(
                    &self.config.urgent_topic_arn,
                    &Notification::high_volume(count),
                )
                .await?;
            info!(count, "published high-volume escalation");
        } else {
            self.notifier
                .publish(&self.config.standard_topic_arn, &Notification::resized())
                .await?;
        }

        Ok(format!(
            "Resized image {} uploaded successfully to {}",
            object_key, self.config.target_bucket
        ))
    }
}

/// Reverse the percent-encoding S3 applies to keys in event payloads.
/// `+` stands for a space there, so it is mapped before decoding.
fn decode_object_key(raw: &str) -> Result<String, Error> {
    let plus_decoded = raw.replace('+', " ");
    let decoded = urlencoding::decode(&plus_decoded).map(Cow::into_owned)?;
    Ok(decoded)
}
