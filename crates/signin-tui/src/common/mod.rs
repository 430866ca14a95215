//! Shared helpers used across feature slices.

pub mod render_utils;
pub mod text;

pub use text::{mask, truncate_with_ellipsis, visible_window};
