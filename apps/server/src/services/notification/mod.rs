//! Notification delivery.
//!
//! Alerts go to a single Slack incoming webhook.

pub mod slack;

pub use slack::SlackNotifier;
