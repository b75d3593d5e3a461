//! Slack notification dispatcher.
//!
//! Sends alerts to a Slack incoming webhook. The JSON message travels as the
//! `payload` field of a URL-encoded form, which Slack accepts alongside raw
//! JSON bodies.

use std::sync::Arc;

use crate::config::SlackConfig;
use crate::error::TransportError;
use crate::models::{AlertText, DispatchOutcome, SlackMessage};
use crate::services::transport::HttpTransport;

/// Form field carrying the serialized message
pub const PAYLOAD_FIELD: &str = "payload";

/// Slack notification dispatcher
#[derive(Clone)]
pub struct SlackNotifier {
    config: SlackConfig,
    transport: Arc<dyn HttpTransport>,
}

impl SlackNotifier {
    pub fn new(config: SlackConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn is_configured(&self) -> bool {
        self.config.webhook_url.is_some()
    }

    /// Builds the form fields posted to the webhook
    pub fn build_form(alert: &AlertText) -> Result<Vec<(String, String)>, serde_json::Error> {
        let message = serde_json::to_string(&SlackMessage::new(alert))?;
        Ok(vec![(PAYLOAD_FIELD.to_string(), message)])
    }

    /// Delivers one alert. A single attempt, never retried.
    pub async fn dispatch(&self, alert: &AlertText) -> DispatchOutcome {
        let Some(webhook_url) = self.config.webhook_url.as_deref() else {
            return DispatchOutcome::TransportFailure(
                "SLACK_INCOMING_WEBHOOK is not configured".to_string(),
            );
        };

        let form = match Self::build_form(alert) {
            Ok(form) => form,
            Err(e) => {
                return DispatchOutcome::TransportFailure(format!(
                    "Failed to serialize payload: {}",
                    e
                ))
            }
        };

        match self.transport.post_form(webhook_url, &form).await {
            Ok(response) if response.is_success() => {
                log::debug!("Alert delivered to Slack (HTTP {})", response.status);
                DispatchOutcome::Delivered
            }
            Ok(response) => {
                let reason = if response.body.is_empty() {
                    format!("Slack API error: HTTP {}", response.status)
                } else {
                    format!("Slack API error: HTTP {}: {}", response.status, response.body)
                };
                DispatchOutcome::TransportFailure(reason)
            }
            Err(e) => {
                let reason = match e {
                    TransportError::Timeout => "Request to Slack timed out".to_string(),
                    TransportError::Connect(_) => "Connection to Slack failed".to_string(),
                    TransportError::Request(detail) => format!("Slack request failed: {}", detail),
                };
                DispatchOutcome::TransportFailure(reason)
            }
        }
    }
}
