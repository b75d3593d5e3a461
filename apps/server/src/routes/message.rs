use actix_web::{web, HttpRequest, HttpResponse};
use bytes::Bytes;
use serde::Deserialize;

use super::{content_type, ok};
use crate::error::{AppError, AppResult};
use crate::models::CallbackRecord;
use crate::services::format_message;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub text: Option<String>,
}

/// GET|POST /message
/// Relays `text` from the query string, or failing that from the body
pub async fn message(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<MessageQuery>,
    body: Bytes,
) -> AppResult<HttpResponse> {
    let text = match query.into_inner().text.filter(|t| !t.is_empty()) {
        Some(text) => text,
        None => CallbackRecord::from_body(content_type(&req), &body)?
            .remove("text")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation("Missing text parameter".to_string()))?,
    };

    let alert = format_message(&text);
    state.notifier.dispatch(&alert).await.into_result()?;

    Ok(ok())
}
