//! Telemetry primitives shared across the Vista workspace.
//!
//! This crate centralises logging setup so the UI and its tooling adopt a
//! consistent observability story: `tracing` everywhere, fmt output natively,
//! and the browser console when compiled for wasm32.

pub mod console;
pub mod error;
pub mod init;

pub use console::ConsoleLayer;
pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging, parse_level};
