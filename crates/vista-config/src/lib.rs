#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Configuration for the Vista dashboard front-end.
//!
//! Layout: `model.rs` (typed configuration), `defaults.rs` (default values),
//! `interval.rs` (refresh interval grammar), `validate.rs` (validation),
//! `loader.rs` (JSON loading with a lenient fallback).

pub mod defaults;
pub mod error;
pub mod interval;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult, IntervalError};
pub use interval::parse_interval;
pub use loader::{load_from_str, load_from_value, load_or_default};
pub use model::NavConfig;
pub use validate::validate;
