use std::env;
use std::time::Duration;

/// Default image-hosting upload endpoint
pub const DEFAULT_IMGBB_API_URL: &str = "https://api.imgbb.com/1/upload";

/// Default inbound body limit (15MB, screenshots are large)
pub const DEFAULT_MAX_BODY_BYTES: usize = 15 * 1024 * 1024;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub imgbb: ImgbbConfig,
    pub slack: SlackConfig,
    /// Payload script served by the catch-all route
    pub payload_path: String,
    /// Timeout applied to every outbound HTTP call
    pub outbound_timeout: Duration,
    pub max_body_bytes: usize,
}

/// Image hosting configuration
#[derive(Debug, Clone)]
pub struct ImgbbConfig {
    /// `None` disables screenshot uploads
    pub api_key: Option<String>,
    pub api_url: String,
}

/// Slack incoming webhook configuration
#[derive(Debug, Clone)]
pub struct SlackConfig {
    pub webhook_url: Option<String>,
}

/// Which integration values are present, as reported by `/health`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthFlags {
    pub imgbb_api_key: bool,
    pub slack_incoming_webhook: bool,
}

impl HealthFlags {
    pub fn all_present(&self) -> bool {
        self.imgbb_api_key && self.slack_incoming_webhook
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            imgbb: ImgbbConfig::from_env(),
            slack: SlackConfig::from_env()?,
            payload_path: env::var("PAYLOAD_PATH").unwrap_or_else(|_| "pload.js".to_string()),
            outbound_timeout: Duration::from_secs(
                env::var("OUTBOUND_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .unwrap_or(5),
            ),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        })
    }

    pub fn health_flags(&self) -> HealthFlags {
        HealthFlags {
            imgbb_api_key: self.imgbb.api_key.is_some(),
            slack_incoming_webhook: self.slack.webhook_url.is_some(),
        }
    }
}

impl ImgbbConfig {
    /// Load image hosting configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var("IMGBB_API_KEY"),
            api_url: env::var("IMGBB_API_URL")
                .unwrap_or_else(|_| DEFAULT_IMGBB_API_URL.to_string()),
        }
    }
}

impl SlackConfig {
    /// Load Slack configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let webhook_url = non_empty_var("SLACK_INCOMING_WEBHOOK");

        if let Some(ref raw) = webhook_url {
            let parsed = url::Url::parse(raw).map_err(|_| ConfigError::InvalidWebhookUrl)?;

            // Exact host match, hooks.slack.com.evil.com must not pass
            if parsed.scheme() != "https" || parsed.host_str() != Some("hooks.slack.com") {
                log::warn!(
                    "SLACK_INCOMING_WEBHOOK does not point at https://hooks.slack.com, alerts may not be delivered"
                );
            }
        }

        Ok(Self { webhook_url })
    }
}

/// Empty values are treated the same as unset ones
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid number")]
    InvalidPort,

    #[error("SLACK_INCOMING_WEBHOOK must be a valid URL")]
    InvalidWebhookUrl,
}
