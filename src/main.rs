use aws_config::BehaviorVersion;
use lambda_runtime::{Error, run, service_fn};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use handlers::ResizeHandler;
use services::{DynamoResizeLog, S3ObjectStore, SnsNotifier};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // --- Logging setup ---
    // No target and no timestamps: CloudWatch adds the ingestion time.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .without_time()
        .init();

    // --- Parse config ---
    let cfg = config::AppConfig::from_env()?;
    tracing::info!("Starting image-resizer with config: {:?}", cfg);

    // --- Initialize AWS clients once per container lifecycle ---
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = Arc::new(S3ObjectStore::new(aws_sdk_s3::Client::new(&aws_config)));
    let log = Arc::new(DynamoResizeLog::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        cfg.table_name.clone(),
    ));
    let notifier = Arc::new(SnsNotifier::new(aws_sdk_sns::Client::new(&aws_config)));

    let handler = ResizeHandler::new(cfg, store, log, notifier);

    run(service_fn(|event| handler.handle(event))).await
}
