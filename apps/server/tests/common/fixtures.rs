//! Test fixtures and configuration builders

use std::time::Duration;

use base64::Engine;
use xless::config::{Config, ImgbbConfig, SlackConfig, DEFAULT_MAX_BODY_BYTES};

pub const SLACK_WEBHOOK: &str = "https://hooks.slack.com/services/T00000000/B00000000/XXXXXXXX";
pub const IMGBB_URL: &str = "https://imgbb.test/1/upload";
pub const IMGBB_KEY: &str = "test-imgbb-key";

/// Config with both integrations set
pub fn configured() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        imgbb: ImgbbConfig {
            api_key: Some(IMGBB_KEY.to_string()),
            api_url: IMGBB_URL.to_string(),
        },
        slack: SlackConfig {
            webhook_url: Some(SLACK_WEBHOOK.to_string()),
        },
        payload_path: "pload.js".to_string(),
        outbound_timeout: Duration::from_secs(5),
        max_body_bytes: DEFAULT_MAX_BODY_BYTES,
    }
}

/// Config with neither integration set
pub fn unconfigured() -> Config {
    let mut config = configured();
    config.imgbb.api_key = None;
    config.slack.webhook_url = None;
    config
}

/// `data:` URL the payload produces for `bytes`
pub fn screenshot_data_url(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
