use async_trait::async_trait;
use std::fmt::Debug;

pub mod sns;

/// Subject line used for every published update.
pub const NOTIFICATION_SUBJECT: &str = "Weather Data Update";

/// Outbound notification channel. Publishing is best-effort from the
/// pipeline's point of view; errors are reported but never block the run.
#[async_trait]
pub trait Notifier: Send + Sync + Debug {
    async fn publish(&self, subject: &str, message: &str) -> anyhow::Result<()>;
}

/// Message body announcing a stored weather object.
pub fn saved_message(city: &str, key: &str) -> String {
    format!("Weather data for {city} has been saved to S3 as {key}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_message_names_city_and_key() {
        let msg = saved_message("Seattle", "Seattle_weather.json");
        assert_eq!(
            msg,
            "Weather data for Seattle has been saved to S3 as Seattle_weather.json."
        );
    }
}
