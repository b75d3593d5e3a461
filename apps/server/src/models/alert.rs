//! Alert models for the notification pipeline.

use serde::Serialize;

use crate::error::DispatchError;

/// Sender name shown in the Slack channel
pub const SLACK_USERNAME: &str = "XLess";

/// A fully formatted, ready-to-send notification body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertText(String);

impl AlertText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AlertText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message body expected by Slack incoming webhooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    pub username: String,
    pub mrkdwn: bool,
    pub text: String,
}

impl SlackMessage {
    pub fn new(alert: &AlertText) -> Self {
        Self {
            username: SLACK_USERNAME.to_string(),
            mrkdwn: true,
            text: alert.as_str().to_string(),
        }
    }
}

/// Result of a single notification attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered,
    TransportFailure(String),
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered)
    }

    /// Converts to a `Result` so handlers can propagate failures with `?`
    pub fn into_result(self) -> Result<(), DispatchError> {
        match self {
            DispatchOutcome::Delivered => Ok(()),
            DispatchOutcome::TransportFailure(reason) => Err(DispatchError { reason }),
        }
    }
}
