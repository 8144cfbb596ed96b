//! Sensor Log Analyzer - Lambda Entry Point

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, Error};
use sensor_analyzer::Analyzer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod settings;
mod event_handler;

use settings::LambdaConfig;
use event_handler::function_handler;

/// Install a JSON subscriber; the log service stamps time itself
fn init_logging(level: Level) -> Result<(), Error> {
    let subscriber = FmtSubscriber::builder()
        .json()
        .with_max_level(level)
        .with_target(true)
        .without_time()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaConfig::from_env()?;
    init_logging(config.max_level())?;

    info!("=== Sensor Log Analyzer v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Thresholds: {:?}", config.thresholds);

    let shared_config = aws_config::load_defaults(BehaviorVersion::v2025_01_17()).await;
    let s3_client = S3Client::new(&shared_config);
    let analyzer = Analyzer::new(&config.thresholds);

    run(service_fn(|event| function_handler(event, &s3_client, &analyzer))).await
}
