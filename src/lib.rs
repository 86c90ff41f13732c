//! Tinyweb - minimal static file server
//!
//! Serves files from a directory over plain HTTP, one connection at a time.

pub mod config;
pub mod http;
pub mod server;
