//! HTTP surface.
//!
//! - GET /examples - payload trigger snippets for this host
//! - GET|POST /message - relay free text
//! - POST /c - blind XSS report from the payload
//! - GET /health - configuration and image host self-test
//! - ANY / - out-of-band callback, serves the payload script

pub mod callback;
pub mod examples;
pub mod health;
pub mod message;

use actix_web::{http::header, web, HttpRequest, HttpResponse};

/// Configures all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/examples", web::get().to(examples::examples))
        .route("/message", web::get().to(message::message))
        .route("/message", web::post().to(message::message))
        .route("/c", web::post().to(callback::collect))
        .route("/health", web::get().to(health::health))
        .route("/", web::route().to(callback::callback));
}

/// Plain-text `ok` acknowledgement
pub(crate) fn ok() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("ok")
}

pub(crate) fn content_type(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
}

/// Reporter address: first forwarded hop, else the peer address
pub(crate) fn remote_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
