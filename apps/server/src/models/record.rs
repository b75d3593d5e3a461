//! Inbound callback data.
//!
//! A callback body is attacker-shaped: any keys, any values, any order.
//! `CallbackRecord` keeps it as an ordered list of string pairs so the
//! rendered alert follows the order the payload sent its fields in.

use actix_web::http::header::HeaderMap;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Field holding the base64 screenshot data URL
pub const SCREENSHOT_FIELD: &str = "Screenshot";
/// Field injected with the hosted screenshot location
pub const SCREENSHOT_URL_FIELD: &str = "Screenshot URL";
/// Field injected with the reporter address
pub const REMOTE_IP_FIELD: &str = "Remote IP";
/// Field holding the page DOM dump
pub const DOM_FIELD: &str = "DOM";

/// Ordered mapping of field name to field value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackRecord {
    fields: Vec<(String, String)>,
}

impl CallbackRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a request body according to its content type.
    ///
    /// JSON bodies must be objects. Anything else that is not empty is read
    /// as URL-encoded form data.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::new());
        }

        let is_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);

        if is_json {
            let value: Value = serde_json::from_slice(body)
                .map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e)))?;
            return Self::from_json(value);
        }

        Ok(Self::from_form(body))
    }

    /// Builds a record from a JSON object, keeping key order
    pub fn from_json(value: Value) -> AppResult<Self> {
        let Value::Object(map) = value else {
            return Err(AppError::Validation(
                "JSON body must be an object".to_string(),
            ));
        };

        let mut record = Self::new();
        for (key, value) in map {
            record.set(key, json_to_text(value));
        }
        Ok(record)
    }

    /// Builds a record from URL-encoded form data
    pub fn from_form(body: &[u8]) -> Self {
        let mut record = Self::new();
        for (key, value) in url::form_urlencoded::parse(body) {
            record.set(key.into_owned(), value.into_owned());
        }
        record
    }

    /// Sets a field. Existing keys keep their position, new keys are appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CallbackRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.set(key, value);
        }
        record
    }
}

fn json_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Headers listed first in a callback alert, in this order
pub const LEADING_HEADERS: &[&str] = &["host", "user-agent", "referer"];

/// Ordered, read-only view of the inbound request headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    headers: Vec<(String, String)>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects request headers. Repeated headers are joined with `, `.
    ///
    /// `HeaderMap` does not keep arrival order, so the set is sorted:
    /// [`LEADING_HEADERS`] first, then every other header by name.
    pub fn from_header_map(map: &HeaderMap) -> Self {
        let mut set = Self::new();
        for name in map.keys() {
            let joined = map
                .get_all(name)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            set.headers.push((name.as_str().to_string(), joined));
        }
        set.headers.sort_by(|(a, _), (b, _)| {
            (leading_rank(a), a.as_str()).cmp(&(leading_rank(b), b.as_str()))
        });
        set
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

fn leading_rank(name: &str) -> usize {
    LEADING_HEADERS
        .iter()
        .position(|h| *h == name)
        .unwrap_or(LEADING_HEADERS.len())
}
