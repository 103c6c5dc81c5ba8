use crate::error::MonitorError;
use serde::Serialize;
use tracing::{debug, info, warn};

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), MonitorError>;
}

#[derive(Debug, Serialize)]
struct Payload<'a> {
    content: &'a str,
}

/// Posts `{"content": ...}` to a chat webhook. Without a webhook url it only logs.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    webhook: Option<String>,
}

impl WebhookNotifier {
    pub fn new(client: reqwest::Client, webhook: Option<String>) -> Self {
        Self { client, webhook }
    }

    pub fn is_configured(&self) -> bool {
        self.webhook.is_some()
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, message: &str) -> Result<(), MonitorError> {
        let Some(webhook) = self.webhook.as_deref() else {
            info!("No webhook configured.");
            return Ok(());
        };

        let response = self
            .client
            .post(webhook)
            .json(&Payload { content: message })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Webhook accepted notification ({})", status);
        } else {
            warn!("Webhook answered {}", status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn payload_shape() {
        let payload = Payload {
            content: "⚠️ **PDF changed!**\nhttps://example.org/a.pdf",
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "content": "⚠️ **PDF changed!**\nhttps://example.org/a.pdf" })
        );
    }

    #[tokio::test]
    async fn missing_webhook_is_a_logged_skip() {
        let notifier = WebhookNotifier::new(reqwest::Client::new(), None);
        assert!(!notifier.is_configured());
        assert!(notifier.notify("🔍 Started monitoring").await.is_ok());
    }

    #[tokio::test]
    async fn posts_json_content() {
        let (base, server) = serve_once("204 No Content", "").await;
        let notifier = WebhookNotifier::new(reqwest::Client::new(), Some(format!("{}/hook", base)));

        notifier
            .notify("⚠️ **PDF changed!**\nhttps://example.org/a.pdf")
            .await
            .unwrap();

        let request = server.await.unwrap().unwrap();
        assert_eq!(request.request_line, "POST /hook HTTP/1.1");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&request.body).unwrap(),
            json!({ "content": "⚠️ **PDF changed!**\nhttps://example.org/a.pdf" })
        );
    }

    #[tokio::test]
    async fn rejected_notification_is_not_an_error() {
        let (base, server) = serve_once("400 Bad Request", "{\"message\": \"Invalid\"}").await;
        let notifier = WebhookNotifier::new(reqwest::Client::new(), Some(base));

        assert!(notifier.notify("🔍 Started monitoring").await.is_ok());
        server.await.unwrap().unwrap();
    }
}
