use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Thumbnail edge length in pixels. Output is always square; the source
/// aspect ratio is discarded.
pub const THUMBNAIL_SIZE: u32 = 100;

/// Length of the trailing window used for the resize-volume check.
pub const VOLUME_WINDOW: Duration = Duration::from_secs(10 * 60);

/// More than this many resizes inside the window triggers the urgent topic.
pub const VOLUME_THRESHOLD: usize = 5;

/// Centralized application configuration.
///
/// Everything the handler needs from the deployment environment, resolved
/// once at cold start. Defaults mirror the values the function was
/// originally deployed with, so an empty environment still produces a
/// working configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bucket that receives the resized copies.
    pub target_bucket: String,
    /// DynamoDB table holding one record per completed resize.
    pub table_name: String,
    /// Topic for the routine per-resize notification.
    pub standard_topic_arn: String,
    /// Topic for the high-volume escalation notification.
    pub urgent_topic_arn: String,
    /// How many times to poll for the source object before giving up.
    pub wait_max_attempts: u32,
    /// Pause between source-object polls.
    pub wait_delay: Duration,
}

impl AppConfig {
    /// Read configuration from environment variables, falling back to the
    /// deployment defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let target_bucket =
            env::var("RESIZER_TARGET_BUCKET").unwrap_or_else(|_| "resized-img-2".into());
        let table_name = env::var("RESIZER_TABLE_NAME").unwrap_or_else(|_| "ResizedImages".into());
        let standard_topic_arn = env::var("RESIZER_STANDARD_TOPIC_ARN")
            .unwrap_or_else(|_| "arn:aws:sns:ap-southeast-2:423623834268:Mytopic-1".into());
        let urgent_topic_arn = env::var("RESIZER_URGENT_TOPIC_ARN").unwrap_or_else(|_| {
            "arn:aws:sns:ap-southeast-2:423623834268:Mytopic-urgent-2mails".into()
        });

        // The poll bounds default to 20 attempts 5 seconds apart, the same
        // budget the S3 `object_exists` waiter enforces.
        let wait_max_attempts = parse_env_or("RESIZER_WAIT_MAX_ATTEMPTS", 20)?;
        let wait_delay_secs: u64 = parse_env_or("RESIZER_WAIT_DELAY_SECS", 5)?;

        Ok(Self {
            target_bucket,
            table_name,
            standard_topic_arn,
            urgent_topic_arn,
            wait_max_attempts,
            wait_delay: Duration::from_secs(wait_delay_secs),
        })
    }
}

fn parse_env_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("parsing {} value `{}`", name, value)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("reading {}", name)),
    }
}
