//! Image hosting models.

use serde::Deserialize;

/// Outcome of relaying one screenshot to the image host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    /// Hosted image page
    ViewerUrl(String),
    /// Transport or service-reported failure
    UploadError(String),
    /// Image hosting is not configured
    Unavailable,
}

impl UploadResult {
    /// Value stored in the `Screenshot URL` field of a callback record
    pub fn screenshot_url(&self) -> &str {
        match self {
            UploadResult::ViewerUrl(url) => url,
            UploadResult::UploadError(reason) => reason,
            UploadResult::Unavailable => "",
        }
    }
}

/// Response body of the imgbb upload API
#[derive(Debug, Deserialize)]
pub struct ImgbbResponse {
    #[serde(default)]
    pub data: Option<ImgbbData>,
    #[serde(default)]
    pub error: Option<ImgbbError>,
}

#[derive(Debug, Deserialize)]
pub struct ImgbbData {
    #[serde(default)]
    pub url_viewer: Option<String>,
}

/// imgbb reports errors either as a bare string or as an object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImgbbError {
    Message(String),
    Detailed { message: String },
}

impl ImgbbError {
    pub fn message(&self) -> &str {
        match self {
            ImgbbError::Message(message) => message,
            ImgbbError::Detailed { message } => message,
        }
    }
}
