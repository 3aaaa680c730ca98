use thiserror::Error;

/// Everything that can go wrong between receiving the event and publishing
/// the notification. All variants are caught at the handler boundary and
/// surfaced as a status-500 result; none escape past it.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("object `{key}` did not appear in bucket `{bucket}` after {attempts} checks")]
    SourceUnavailable {
        bucket: String,
        key: String,
        attempts: u32,
    },
    #[error("object store: {0}")]
    ObjectStore(String),
    #[error("decoding image: {0}")]
    Decode(image::ImageError),
    #[error("encoding image: {0}")]
    Encode(image::ImageError),
    #[error("recording resize: {0}")]
    Record(String),
    #[error("counting recent resizes: {0}")]
    WindowQuery(String),
    #[error("publishing notification: {0}")]
    Notify(String),
}

pub type ResizeResult<T> = Result<T, ResizeError>;
