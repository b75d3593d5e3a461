//! Integration tests module
//!
//! Drives the full route table through `actix_web::test`, plus the reqwest
//! transport against a local mock server.
