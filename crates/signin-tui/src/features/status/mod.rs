//! Login status slice: submit control and error banner.

mod render;
mod state;
mod update;

pub use render::{render_error_banner, render_submit};
pub use state::{BannerId, ERROR_MESSAGE, ErrorBanner, FADE_FRAMES, SubmitButton};
pub use update::{apply_status, apply_validation, handle_auto_hide};
