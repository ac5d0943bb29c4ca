use crate::{Error, Result, loans, notify};

use aws_sdk_sns::{Client, error::DisplayErrorContext};

/// [`notify::Notifier`] publishing to a single SNS topic.
#[derive(Clone, Debug)]
pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsNotifier {
    /// Notifier publishing to `topic_arn` through `client`.
    pub fn new(client: Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }

    /// ARN of the alert topic.
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

#[async_trait::async_trait]
impl notify::Notifier for SnsNotifier {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "books_dynamodb.publish", skip_all, err)
    )]
    async fn publish(&self, notification: &loans::Notification) -> Result<()> {
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(&notification.subject)
            .message(&notification.message)
            .send()
            .await
            .map_err(|error| Error::notify("Error publishing alert", DisplayErrorContext(error)))?;
        Ok(())
    }
}
