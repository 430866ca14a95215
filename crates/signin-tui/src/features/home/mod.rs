//! Home screen slice.

mod render;

pub use render::render_home;
