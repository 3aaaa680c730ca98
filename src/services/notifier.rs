//! Outbound notification publishing.

use crate::errors::{ResizeError, ResizeResult};
use crate::models::Notification;
use async_trait::async_trait;

/// Publish one subject/message pair to a topic.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, topic_arn: &str, notification: &Notification) -> ResizeResult<()>;
}

/// SNS-backed implementation.
#[derive(Clone)]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
}

impl SnsNotifier {
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, topic_arn: &str, notification: &Notification) -> ResizeResult<()> {
        self.client
            .publish()
            .topic_arn(topic_arn)
            .subject(&notification.subject)
            .message(&notification.message)
            .send()
            .await
            .map_err(|err| ResizeError::Notify(err.to_string()))?;
        Ok(())
    }
}
