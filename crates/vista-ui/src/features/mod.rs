//! Feature slices.

pub mod dashnav;
