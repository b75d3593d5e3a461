use std::sync::Arc;

use crate::config::Config;
use crate::services::{HttpTransport, ScreenshotRelay, SlackNotifier};

/// Shared, read-only state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub relay: ScreenshotRelay,
    pub notifier: SlackNotifier,
}

impl AppState {
    /// Wires the relay and the notifier to one outbound transport
    pub fn new(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        let relay = ScreenshotRelay::new(config.imgbb.clone(), Arc::clone(&transport));
        let notifier = SlackNotifier::new(config.slack.clone(), transport);

        Self {
            config,
            relay,
            notifier,
        }
    }
}
