//! Dashboard navigation bar feature slice.
//!
//! # Design
//! - Keep command handling and render policy DOM-free so they test natively.
//! - Route every side effect through the typed collaborators in
//!   [`crate::core::services::NavServices`].

pub mod actions;
pub mod controller;
pub mod layout;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::DashNav;
