//! Alert text builders.
//!
//! Every caller-controlled name and value goes through [`escape_code_span`]
//! before it lands inside Slack mrkdwn, so a crafted value cannot close the
//! surrounding code span or fence. Nothing else is rewritten: DOM dumps and
//! URLs reach the channel as they were captured.

use std::fmt::Write;

use crate::models::record::{DOM_FIELD, REMOTE_IP_FIELD, SCREENSHOT_FIELD};
use crate::models::{AlertText, CallbackRecord, HeaderSet};

pub const BLIND_XSS_HEADER: &str = "*XSSless: Blind XSS Alert*\n";
pub const CALLBACK_HEADER: &str = "*XSSless: Out-of-Band Callback Alert*\n";
pub const MESSAGE_HEADER: &str = "*XSSless: Message Alert*\n";

/// Stand-in for a backtick, which Slack has no escape sequence for
const BACKTICK_SUBSTITUTE: &str = "\u{02CB}";

/// Renders a blind XSS callback record.
///
/// The raw screenshot is never rendered. Empty values show as `None`.
pub fn format_fields(record: &CallbackRecord) -> AlertText {
    let mut alert = String::from(BLIND_XSS_HEADER);

    for (name, value) in record.iter() {
        if name == SCREENSHOT_FIELD {
            continue;
        }

        let is_dom = name == DOM_FIELD;
        let name = escape_code_span(name);
        if value.is_empty() {
            let _ = writeln!(alert, "*{}:* `None`", name);
            continue;
        }

        let value = if is_dom {
            format!("\n\n{}\n\n", escape_code_span(value))
        } else {
            escape_code_span(value)
        };
        let _ = writeln!(alert, "*{}:* \n`{}`", name, value);
    }

    AlertText::new(alert)
}

/// Renders an out-of-band callback: reporter address, request URI, headers
pub fn format_callback(headers: &HeaderSet, record: &CallbackRecord, request_path: &str) -> AlertText {
    let mut alert = String::from(CALLBACK_HEADER);

    let remote_ip = record.get(REMOTE_IP_FIELD).unwrap_or("unknown");
    let _ = writeln!(alert, "• *IP Address:* `{}`", escape_code_span(remote_ip));
    let _ = writeln!(alert, "• *Request URI:* `{}`", escape_code_span(request_path));

    for (name, value) in headers.iter() {
        let _ = writeln!(
            alert,
            "• *{}:* `{}`",
            escape_code_span(name),
            escape_code_span(value)
        );
    }

    AlertText::new(alert)
}

/// Wraps free text in a fenced code block.
///
/// The body is not passed through verbatim: backticks are replaced like in
/// every other alert, so the text cannot close the fence early.
pub fn format_message(body: &str) -> AlertText {
    AlertText::new(format!(
        "{}```\n{}\n```\n",
        MESSAGE_HEADER,
        escape_code_span(body)
    ))
}

/// Replaces backticks, which would otherwise end the enclosing code span
pub fn escape_code_span(text: &str) -> String {
    text.replace('`', BACKTICK_SUBSTITUTE)
}
