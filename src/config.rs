//! Runtime configuration.
//!
//! All configuration is read from environment variables once per process.

use crate::{Error, Result, notify, store};

use aws_config::{BehaviorVersion, Region, SdkConfig};
use serde::{Deserialize, Serialize};

/// Default table holding the books.
pub const DEFAULT_TABLE_NAME: &str = "books";

/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Settings shared by every handler invocation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Table holding the books (`TABLE_NAME`).
    pub table_name: String,
    /// Region of the table (`AWS_REGION`).
    pub region: String,
    /// Endpoint override, e.g. a local emulator (`DYNAMODB_ENDPOINT`).
    pub endpoint_url: Option<String>,
    /// Topic receiving due-loan alerts (`SNS_TOPIC_ARN`).
    pub sns_topic_arn: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_owned(),
            region: DEFAULT_REGION.to_owned(),
            endpoint_url: None,
            sns_topic_arn: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("TABLE_NAME") {
            if v.trim().is_empty() {
                return Err(Error::Config("TABLE_NAME is empty".to_owned()));
            }
            config.table_name = v;
        }
        if let Some(v) = lookup("AWS_REGION").filter(|v| !v.is_empty()) {
            config.region = v;
        }
        config.endpoint_url = lookup("DYNAMODB_ENDPOINT").filter(|v| !v.is_empty());
        config.sns_topic_arn = lookup("SNS_TOPIC_ARN").filter(|v| !v.is_empty());

        Ok(config)
    }

    async fn sdk_config(&self) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await
    }

    /// Build the DynamoDB client described by this configuration.
    ///
    /// The endpoint override only applies to DynamoDB.
    pub async fn client(&self) -> aws_sdk_dynamodb::Client {
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&self.sdk_config().await);
        if let Some(endpoint_url) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }
        aws_sdk_dynamodb::Client::from_conf(builder.build())
    }

    /// Build the table-backed store described by this configuration.
    pub async fn store(&self) -> store::DynamoStore {
        store::DynamoStore::new(self.client().await, &self.table_name)
    }

    /// Build the notifier publishing due-loan alerts to `SNS_TOPIC_ARN`.
    pub async fn notifier(&self) -> Result<notify::SnsNotifier> {
        let topic_arn = self
            .sns_topic_arn
            .as_deref()
            .ok_or_else(|| Error::Config("SNS_TOPIC_ARN is not set".to_owned()))?;
        let client = aws_sdk_sns::Client::new(&self.sdk_config().await);
        Ok(notify::SnsNotifier::new(client, topic_arn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: collections::HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.table_name, "books");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.sns_topic_arn, None);
    }

    #[test]
    fn test_should_read_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TABLE_NAME", "library"),
            ("AWS_REGION", "eu-west-1"),
            ("DYNAMODB_ENDPOINT", "http://localhost:4566"),
            ("SNS_TOPIC_ARN", "arn:aws:sns:eu-west-1:123456789012:loans"),
        ]))
        .unwrap();
        assert_eq!(config.table_name, "library");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(
            config.sns_topic_arn.as_deref(),
            Some("arn:aws:sns:eu-west-1:123456789012:loans")
        );
    }

    #[test]
    fn test_should_reject_blank_table_name() {
        let result = Config::from_lookup(lookup(&[("TABLE_NAME", "  ")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_notifier_requires_topic() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(matches!(config.notifier().await, Err(Error::Config(_))));
    }
}
