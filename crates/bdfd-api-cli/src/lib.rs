//! BDFD API CLI — command-line access to functions, callbacks and node status.

pub mod commands;
pub mod config;
pub mod render;

pub use config::{resolve_api_url, resolve_status_url};
