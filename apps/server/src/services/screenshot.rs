//! Screenshot relay.
//!
//! Forwards the base64 PNG captured by the payload to imgbb and resolves to
//! the hosted viewer page. Failures never escape as errors: they become an
//! [`UploadResult::UploadError`] whose reason ends up in the alert instead of
//! the link.

use std::sync::Arc;

use base64::Engine;

use super::transport::{FilePart, HttpTransport, TransportResponse};
use crate::config::ImgbbConfig;
use crate::models::{ImgbbResponse, UploadResult};

/// Prefix the payload puts in front of `canvas.toDataURL()` output
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Known-good image used by the health check self-test
pub const REFERENCE_IMAGE: &str = "iVBORw0KGgoAAAANSUhEUgAAAGkAAABfCAMAAADcfxm4AAABC1BMVEUAAADnTDznTDznTDwsPlAsPlDnTDznTDznTDznTDznTDznTDznTDwsPlAsPlDnTDznTDznTDwsPlDnTDwsPlAsPlDnTDwsPlDnTDznTDznTDwsPlAsPlDnTDznTDwsPlAsPlAsPlDnTDwsPlDnTDznTDwsPlAsPlDnTDznTDwsPlAsPlDnTDznTDznTDwsPlDnTDwsPlDnTDwsPlAsPlDnTDznTDwsPlDnTDznTDwsPlAsPlAsPlDnTDznTDznTDznTDwsPlDnTDwsPlDnTDwsPlAsPlAsPlAsPlDnTDwsPlDnTDznTDznTDwsPlAsPlAsPlAsPlAsPlDnTDznTDwsPlDmTDznTDwsPlAn7CxuAAAAV3RSTlMA/PkC+KTx3uzKllAQ51RGPhwWBwbzn5hhIRXj2tHFiYJbVkwoGBQMBNjFvr6SaGM3My4nGgr17efh3tS6tYx6qZKBaksvLB+1rayah25BEHdxOXSbeAW0nsk1AAAETElEQVRo3q2aeVPiQBDFOwki4ZBT5V4WD1DEVURABa/V9T73CN//k6yFFm0S5k2S8fenRdUrnj2ve3ogG9/HiMU9QkQtxAnZyJSg1DcCXEChyj7Z+QaVEuskZH8DCWkX5GAvBKV+kpBzC3FKLuag0qZBAlbDSGhQIBePY8iuQMi4sRDbNINNqHQWqBy22ArPhX7YmF0OFSQU7tAsGmUotUKz+O3jKDHPUGmOZlCIICFzX6DU7SOlfpfc3CEhfYdEnI0RP8hFSkNK9yTkFzy9LXLS3JLEkJhbfzGbh96lCIBP7wvZic8jpTYhci2YSGTnHgltFAmBT29o13vgaUnCNI68d6lTCxAlGS+eEykJvYuTjPUEkvrOH8yaCt7Je++Qo3k7oHfM3qKnmkgfAKH5NQJ4673L9MGxBYiRJ17h5PIRsx0dCC2RR4ZI6i9NuFHwjllBSke5STloCt4xOTRQ1Fz9D3uH+QG+0hO9saTmHfN0KFRamPQ/XdE7piYSuuV0UPGOyfQFvfAXvfGAvCuSP85AOaQHqt7JB4ryOhiHgHeQOWGS7+iqdScfKK4n5VCF3vnHaLlz/BI0C+gdZmF2a187gN4FIXfk7OyTcmhD74Lx0z0r43L4QwFZL9n7eg5Px3hGwdTcbT2vMKMArvrOu2fxAM0oCiyzUCIDZwfsnZzLkL0cOj1V7+SR1JqUw0jVO/nkHHqlN+rgThYnJbqHn4e8IrgsVY2vMW/xSroOiJEKC/ZozUtWKcHJJOSHiUkpeTelxOEq4lTZO9xsmfBqYO9Krk2EUYU3JmXvcL4ykbSyd9xviwO89gpC17loLj1Jl9UHcXXvuCY0uAdV9o4nsH+wJsys/75eHgtHMERdoQO6aiICI4l8sgLWK1HrCyMpU0Z3NA1GkrJ3XBOGiZR6HWXveGP5YCHa6t7xNS2CI0nBO6bcANd2EEnQO1QTUGk+ruAdM8c3NSH54N4xoUfiYUyEaQT2jlnm1TXgImjeMaUMb/YAI2XveAW7quNXEy+9AjHkD+LnuiXPfRbtcchDTYQLJOF2jKjJ3m+Zc+lOD3HUAA+4/gaKvb6PN8JCOPjpNVq+nghxTZhNoITfIhNXZCdpQcBVdHfR35t7toJO1IZ4dGkIl8l8y2VQQ9TNaH51H+448FuGi7XBjINk3uULWcmdzP+PMKJOlXaMVYqpOJiN4YbcTYeHpEH1OMa3p3TqZDRvRUHe+XxuN0bvg8PW+UV6+re15P3o3dYeSzPdhI+jxCS1yOgkNlVppmP3W58O9B3OO/lRYpo7Rc6M+nHVERuRAsg78NYO6NTblYiXnL3C3g3F+dWkbCe/VJkZgZquO6ck43os6Upi6hVb89U0barT03Vr27lshTwTIGX7Dr3eVOhds5r10Ss2cwRomp+VdM3un6YnickNRRq8bGNg+GngjiP3rkaYdOTzPwmtXS7HCt6RYVDbghzTB/8BjE+qcM2S2aUAAAAASUVORK5CYII=";

/// Relays screenshots to the configured image host
#[derive(Clone)]
pub struct ScreenshotRelay {
    config: ImgbbConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ScreenshotRelay {
    pub fn new(config: ImgbbConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Uploads a screenshot, with or without its data URL prefix
    pub async fn upload_screenshot(&self, screenshot: &str) -> UploadResult {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return UploadResult::Unavailable;
        };

        let encoded = screenshot.strip_prefix(DATA_URL_PREFIX).unwrap_or(screenshot);
        let bytes = match base64::engine::general_purpose::STANDARD.decode(encoded.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                return UploadResult::UploadError(format!("Invalid screenshot encoding: {}", e))
            }
        };

        let url = match self.upload_url(api_key) {
            Ok(url) => url,
            Err(reason) => return UploadResult::UploadError(reason),
        };

        let file = FilePart {
            field: "image".to_string(),
            file_name: "screenshot.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes,
        };

        match self.transport.post_file(&url, file).await {
            Ok(response) => Self::interpret(&response),
            Err(e) => {
                log::warn!("Screenshot upload failed: {}", e);
                UploadResult::UploadError(e.to_string())
            }
        }
    }

    /// Uploads the reference image to check the key and the host end to end
    pub async fn self_test(&self) -> UploadResult {
        self.upload_screenshot(REFERENCE_IMAGE).await
    }

    fn upload_url(&self, api_key: &str) -> Result<String, String> {
        let mut url = url::Url::parse(&self.config.api_url)
            .map_err(|e| format!("Invalid IMGBB_API_URL: {}", e))?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url.into())
    }

    fn interpret(response: &TransportResponse) -> UploadResult {
        let parsed: ImgbbResponse = match serde_json::from_str(&response.body) {
            Ok(parsed) => parsed,
            Err(e) if response.is_success() => {
                return UploadResult::UploadError(format!("Malformed imgbb response: {}", e))
            }
            Err(_) => return UploadResult::UploadError(format!("HTTP {}", response.status)),
        };

        if let Some(error) = parsed.error {
            log::warn!("imgbb rejected upload: {}", error.message());
            return UploadResult::UploadError(error.message().to_string());
        }

        if !response.is_success() {
            return UploadResult::UploadError(format!("HTTP {}", response.status));
        }

        match parsed.data.and_then(|data| data.url_viewer) {
            Some(url) => UploadResult::ViewerUrl(url),
            None => UploadResult::UploadError("missing url_viewer in response".to_string()),
        }
    }
}
