//! One persisted entry per completed resize.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single completed resize, as stored in the log table.
///
/// Records are append-only; the same key shows up once per resize, so
/// repeated uploads of one object produce multiple records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResizeRecord {
    /// Key of the object that was resized.
    #[serde(rename = "ObjectKey")]
    pub object_key: String,

    /// Insertion time, UTC seconds since epoch.
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
}

impl ResizeRecord {
    /// Build a record for `object_key` stamped with the current time.
    pub fn now(object_key: impl Into<String>) -> Self {
        Self {
            object_key: object_key.into(),
            timestamp: Utc::now().timestamp(),
        }
    }
}
