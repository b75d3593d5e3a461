use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::models::UploadResult;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    #[serde(rename = "IMGBB_API_KEY")]
    pub imgbb_api_key: bool,
    #[serde(rename = "SLACK_INCOMING_WEBHOOK")]
    pub slack_incoming_webhook: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imgbb_response: Option<String>,
}

/// Configuration check.
/// Returns 400 if either integration is unset, otherwise uploads the
/// reference image and reports what the image host said.
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let flags = state.config.health_flags();

    let mut response = HealthResponse {
        imgbb_api_key: flags.imgbb_api_key,
        slack_incoming_webhook: flags.slack_incoming_webhook,
        imgbb_response: None,
    };

    if !flags.all_present() {
        log::warn!("Health check failed: integration configuration missing");
        return HttpResponse::BadRequest().json(response);
    }

    response.imgbb_response = match state.relay.self_test().await {
        UploadResult::ViewerUrl(url) => Some(url),
        UploadResult::UploadError(reason) => Some(reason),
        UploadResult::Unavailable => None,
    };

    HttpResponse::Ok().json(response)
}
