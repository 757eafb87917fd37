use anyhow::anyhow;

use crate::{
    config::Config,
    error::DashboardError,
    model::{self, WeatherRecord},
    notify::{self, Notifier},
    provider::WeatherProvider,
    storage::ObjectStore,
};

const CONTENT_TYPE_JSON: &str = "application/json";

/// Pipeline context: configuration plus the client handles, acquired once
/// at startup and shared by every city in the run.
#[derive(Debug)]
pub struct Dashboard {
    config: Config,
    provider: Box<dyn WeatherProvider>,
    store: Box<dyn ObjectStore>,
    notifier: Box<dyn Notifier>,
}

impl Dashboard {
    pub fn new(
        config: Config,
        provider: Box<dyn WeatherProvider>,
        store: Box<dyn ObjectStore>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self { config, provider, store, notifier }
    }

    /// Run the full pipeline: ensure the bucket, then process each city in
    /// order. Per-city failures are logged and skipped; only a bootstrap
    /// failure aborts the run.
    pub async fn run(&self) -> Result<(), DashboardError> {
        self.ensure_bucket().await?;

        for city in &self.config.cities {
            match self.process_city(city).await {
                Ok(key) => tracing::info!(city = %city, key = %key, "city processed"),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    tracing::warn!(city = %city, stage = err.stage(), error = %err, "skipping city");
                }
            }
        }

        Ok(())
    }

    /// Fetch, store, and announce weather data for one city, returning the
    /// storage key that was written. A failed publish is logged and
    /// swallowed; the write outcome stands on its own.
    pub async fn process_city(&self, city: &str) -> Result<String, DashboardError> {
        tracing::info!(city, "processing weather data");

        let record = self
            .provider
            .fetch_current(city)
            .await
            .map_err(|cause| DashboardError::Fetch { city: city.to_owned(), cause })?;

        let key = self.save_record(record, city).await?;
        tracing::info!(city, key = %key, "saved weather data");

        if let Err(err) = self.notify_saved(city, &key).await {
            tracing::warn!(city, stage = err.stage(), error = %err, "notification failed");
        }

        Ok(key)
    }

    /// Probe-then-create bucket bootstrap. A probe error falls through to
    /// the creation attempt; a creation error is fatal.
    async fn ensure_bucket(&self) -> Result<(), DashboardError> {
        let bucket = &self.config.bucket;

        let exists = match self.store.bucket_exists(bucket).await {
            Ok(exists) => exists,
            Err(err) => {
                tracing::warn!(bucket = %bucket, error = %format!("{err:#}"), "bucket probe failed, attempting creation");
                false
            }
        };

        if exists {
            tracing::info!(bucket = %bucket, "bucket exists");
            return Ok(());
        }

        tracing::info!(bucket = %bucket, "creating bucket");
        self.store
            .create_bucket(bucket)
            .await
            .map_err(|cause| DashboardError::Bootstrap { bucket: bucket.clone(), cause })?;
        tracing::info!(bucket = %bucket, "bucket created");

        Ok(())
    }

    /// Pick a storage key that does not clobber the base object, stamp the
    /// record, and write it.
    async fn save_record(
        &self,
        mut record: WeatherRecord,
        city: &str,
    ) -> Result<String, DashboardError> {
        let bucket = &self.config.bucket;
        let base = model::base_key(city);

        if record.is_empty() {
            return Err(DashboardError::Write {
                key: base,
                cause: anyhow!("empty weather record for '{city}'"),
            });
        }

        let timestamp = model::timestamp_now();

        // One suffix attempt only; two runs landing in the same second after
        // the base key exists can still race on the suffixed key.
        let key = match self.store.object_exists(bucket, &base).await {
            Ok(true) => model::timestamped_key(city, &timestamp),
            Ok(false) => base,
            Err(cause) => return Err(DashboardError::Probe { key: base, cause }),
        };

        record.set_timestamp(&timestamp);
        let body = record
            .to_json_bytes()
            .map_err(|err| DashboardError::Write { key: key.clone(), cause: err.into() })?;

        self.store
            .put_object(bucket, &key, body, CONTENT_TYPE_JSON)
            .await
            .map_err(|cause| DashboardError::Write { key: key.clone(), cause })?;

        Ok(key)
    }

    async fn notify_saved(&self, city: &str, key: &str) -> Result<(), DashboardError> {
        self.notifier
            .publish(notify::NOTIFICATION_SUBJECT, &notify::saved_message(city, key))
            .await
            .map_err(|cause| DashboardError::Notify { city: city.to_owned(), cause })?;

        tracing::info!(city, key, "notification sent");
        Ok(())
    }
}
