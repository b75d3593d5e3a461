//! Outbound HTTP seam.
//!
//! The screenshot relay and the Slack notifier only ever need two kinds of
//! request, so they talk to this trait instead of `reqwest` directly. Tests
//! swap in a recording implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;

/// A completed HTTP exchange, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A file sent as one part of a multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `application/x-www-form-urlencoded` fields
    async fn post_form(
        &self,
        url: &str,
        fields: &[(String, String)],
    ) -> Result<TransportResponse, TransportError>;

    /// POST a single file as `multipart/form-data`
    async fn post_file(&self, url: &str, file: FilePart)
        -> Result<TransportResponse, TransportError>;
}

/// `HttpTransport` backed by a shared reqwest client
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    async fn read(
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<TransportResponse, TransportError> {
        let response = response.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;
        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        fields: &[(String, String)],
    ) -> Result<TransportResponse, TransportError> {
        Self::read(self.client.post(url).form(fields).send().await).await
    }

    async fn post_file(
        &self,
        url: &str,
        file: FilePart,
    ) -> Result<TransportResponse, TransportError> {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime_type)
            .map_err(|e| TransportError::Request(format!("failed to build form part: {}", e)))?;
        let form = reqwest::multipart::Form::new().part(file.field, part);

        Self::read(self.client.post(url).multipart(form).send().await).await
    }
}

/// The request URL is stripped: it carries the imgbb key and the webhook secret
fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::Connect(e.without_url().to_string())
    } else {
        TransportError::Request(e.without_url().to_string())
    }
}
