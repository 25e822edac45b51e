//! Core, DOM-free primitives and helpers for the Web UI.
pub mod dashboard;
pub mod playlist;
pub mod query;
pub mod refresh;
pub mod search;
pub mod services;
pub mod share;
pub mod store;
pub mod time_range;
pub mod ui;
pub mod widget;
