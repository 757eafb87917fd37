use anyhow::{Context, Result};
use std::env;

/// Cities processed when no override is supplied, in run order.
pub const DEFAULT_CITIES: &[&str] = &["Philadelphia", "Seattle", "New York", "Nigeria", "London"];

/// Runtime configuration, read once from the process environment at startup
/// and passed into the pipeline context.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: String,

    /// Name of the bucket weather objects are written to.
    pub bucket: String,

    /// ARN of the notification topic.
    pub topic_arn: String,

    /// Ordered list of cities to process.
    pub cities: Vec<String>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Requires `OPENWEATHER_API_KEY`, `AWS_BUCKET_NAME` and `SNS_TOPIC_ARN`.
    /// `WEATHER_CITIES` (comma-separated) optionally overrides the default
    /// city list.
    pub fn from_env() -> Result<Self> {
        let api_key = require_var("OPENWEATHER_API_KEY")?;
        let bucket = require_var("AWS_BUCKET_NAME")?;
        let topic_arn = require_var("SNS_TOPIC_ARN")?;
        let cities = parse_city_list(env::var("WEATHER_CITIES").ok().as_deref());

        Ok(Self { api_key, bucket, topic_arn, cities })
    }
}

fn require_var(name: &str) -> Result<String> {
    env::var(name).with_context(|| {
        format!(
            "Missing required environment variable '{name}'.\n\
             Hint: set it in the function environment before invoking."
        )
    })
}

/// Parse a comma-separated city override, falling back to the default list
/// when absent or blank.
fn parse_city_list(raw: Option<&str>) -> Vec<String> {
    let cities: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(str::to_owned)
        .collect();

    if cities.is_empty() {
        DEFAULT_CITIES.iter().map(|&city| city.to_owned()).collect()
    } else {
        cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cities_when_no_override() {
        let cities = parse_city_list(None);
        assert_eq!(cities, DEFAULT_CITIES);
    }

    #[test]
    fn blank_override_falls_back_to_defaults() {
        let cities = parse_city_list(Some("  , ,"));
        assert_eq!(cities, DEFAULT_CITIES);
    }

    #[test]
    fn override_is_split_and_trimmed() {
        let cities = parse_city_list(Some("Oslo, Bergen ,Tromsø"));
        assert_eq!(cities, vec!["Oslo", "Bergen", "Tromsø"]);
    }

    #[test]
    fn override_preserves_order() {
        let cities = parse_city_list(Some("B,A,C"));
        assert_eq!(cities, vec!["B", "A", "C"]);
    }
}
