use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::model::WeatherRecord;

use super::WeatherProvider;

/// OpenWeather current-conditions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    /// Point the provider at a different endpoint, e.g. a mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, city: &str) -> Result<WeatherRecord> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather for '{city}'"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather response body for '{city}'"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather request for '{city}' failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        // The payload is stored as-is; only well-formed JSON objects pass.
        let parsed: Map<String, Value> = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather JSON for '{city}'"))?;

        Ok(WeatherRecord::new(parsed))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary; error bodies can carry multi-byte text.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
