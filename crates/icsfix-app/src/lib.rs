//! HTTP front end of the feed patcher.

pub mod app;
pub mod config;
pub mod error;
pub mod upstream_handler;
