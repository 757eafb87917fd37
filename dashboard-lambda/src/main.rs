//! AWS Lambda entrypoint for the weather dashboard collector.
//!
//! Wires the real clients (OpenWeather over HTTP, S3, SNS) into the core
//! pipeline and runs the full city list to completion per invocation.

use aws_config::BehaviorVersion;
use dashboard_core::{
    Config, Dashboard,
    notify::sns::SnsNotifier,
    provider::openweather::OpenWeatherProvider,
    storage::s3::S3ObjectStore,
};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde::{Deserialize, Serialize};

/// Invocation payload. All fields are optional; an empty event runs the
/// configured city list.
#[derive(Debug, Default, Deserialize)]
struct Request {
    /// Override for the configured city list.
    cities: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct Response {
    message: String,
    cities_processed: usize,
}

async fn function_handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    tracing::info!("starting weather dashboard run");

    let mut config = Config::from_env()?;

    if let Some(cities) = event.payload.cities
        && !cities.is_empty()
    {
        config.cities = cities;
    }
    let city_count = config.cities.len();

    let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let s3_client = aws_sdk_s3::Client::new(&aws);
    let sns_client = aws_sdk_sns::Client::new(&aws);

    let provider = OpenWeatherProvider::new(config.api_key.clone());
    let store = S3ObjectStore::new(s3_client);
    let notifier = SnsNotifier::new(sns_client, config.topic_arn.clone());

    let dashboard = Dashboard::new(
        config,
        Box::new(provider),
        Box::new(store),
        Box::new(notifier),
    );
    dashboard.run().await?;
    tracing::info!(cities = city_count, "weather dashboard run completed");

    Ok(Response {
        message: "weather dashboard run completed".to_owned(),
        cities_processed: city_count,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .without_time()
        .init();

    run(service_fn(function_handler)).await
}
