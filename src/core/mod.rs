//! Core utilities: configuration constants and logging

pub mod config;
pub mod logging;

pub use logging::init_logger;
