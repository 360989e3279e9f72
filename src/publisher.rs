// Publishing collaborators for reporter messages.

use crate::config::PublishingConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, message: &str) -> anyhow::Result<()>;
}

/// Dry-run publisher: prints the message and logs it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPublisher;

#[async_trait]
impl Publisher for LogPublisher {
    async fn publish(&self, message: &str) -> anyhow::Result<()> {
        info!(publisher = "log", "{}", message);
        println!("{}", message);
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct WebhookBody<'a> {
    text: &'a str,
}

/// POSTs `{"text": message}` to a webhook (chat bridges, social posting relays).
pub struct WebhookPublisher {
    http: reqwest::Client,
    url: String,
}

impl WebhookPublisher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(crate::version::user_agent())
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Publisher for WebhookPublisher {
    async fn publish(&self, message: &str) -> anyhow::Result<()> {
        self.http
            .post(&self.url)
            .json(&WebhookBody { text: message })
            .send()
            .await?
            .error_for_status()?;
        info!(publisher = "webhook", url = %self.url, "message delivered");
        Ok(())
    }
}

/// Webhook when `publishing.webhook_url` is set, log-only otherwise.
pub fn from_config(config: &PublishingConfig) -> anyhow::Result<Box<dyn Publisher>> {
    match &config.webhook_url {
        Some(url) => Ok(Box::new(WebhookPublisher::new(
            url.clone(),
            Duration::from_secs(config.timeout_secs),
        )?)),
        None => Ok(Box::new(LogPublisher)),
    }
}
