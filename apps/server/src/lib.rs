//! XLess Server Library
//!
//! Blind XSS callback collector. This module exposes the server components
//! for testing purposes.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use state::AppState;
