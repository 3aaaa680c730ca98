pub mod notifier;
pub mod object_store;
pub mod resize_log;
pub mod thumbnail;

pub use notifier::{Notifier, SnsNotifier};
pub use object_store::{ObjectStore, S3ObjectStore};
pub use resize_log::{DynamoResizeLog, ResizeLog};
