use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_sns::Client;

use super::Notifier;

/// [`Notifier`] publishing to a preconfigured SNS topic.
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(client: Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<()> {
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map(|_| ())
            .with_context(|| format!("Failed to publish to topic '{}'", self.topic_arn))
    }
}
