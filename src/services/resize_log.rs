//! Append-only log of completed resizes, used for the trailing-window
//! volume check.

use crate::errors::{ResizeError, ResizeResult};
use crate::models::ResizeRecord;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

/// Persistence over resize records. Records are never updated or deleted;
/// the only read path is the windowed count.
#[async_trait]
pub trait ResizeLog: Send + Sync {
    /// Append one record. Duplicate keys are expected and kept.
    async fn append(&self, record: &ResizeRecord) -> ResizeResult<()>;

    /// Count records with `timestamp >= cutoff` (epoch seconds).
    async fn count_since(&self, cutoff: i64) -> ResizeResult<usize>;
}

/// DynamoDB-backed implementation over a table with `ObjectKey` (S) and
/// `Timestamp` (N) attributes.
#[derive(Clone)]
pub struct DynamoResizeLog {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoResizeLog {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ResizeLog for DynamoResizeLog {
    async fn append(&self, record: &ResizeRecord) -> ResizeResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("ObjectKey", AttributeValue::S(record.object_key.clone()))
            .item("Timestamp", AttributeValue::N(record.timestamp.to_string()))
            .send()
            .await
            .map_err(|err| ResizeError::Record(err.to_string()))?;
        Ok(())
    }

    // Full-table scan with a timestamp filter. The table has no index on
    // Timestamp, so the filter runs over every item; fine at the volumes
    // this table sees, but a time-keyed range query is the upgrade path if
    // that ever changes.
    async fn count_since(&self, cutoff: i64) -> ResizeResult<usize> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("#ts >= :cutoff")
            .expression_attribute_names("#ts", "Timestamp")
            .expression_attribute_values(":cutoff", AttributeValue::N(cutoff.to_string()))
            .send()
            .await
            .map_err(|err| ResizeError::WindowQuery(err.to_string()))?;
        let count = output.items().len();
        debug!(cutoff, count, "scanned resize log");
        Ok(count)
    }
}
