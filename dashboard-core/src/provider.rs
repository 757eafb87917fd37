use crate::model::WeatherRecord;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather observations.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city.
    ///
    /// Any network, HTTP-status, or parse problem surfaces as an error; the
    /// caller decides what a failed fetch means for the rest of the run.
    async fn fetch_current(&self, city: &str) -> anyhow::Result<WeatherRecord>;
}
