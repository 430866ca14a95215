//! Login form slice: email/password fields and focus.

mod render;
mod state;
mod update;

pub use render::{FieldView, field_view, render_field};
pub use state::{Field, Focus, FormState, TextField};
pub use update::{handle_key, handle_paste};
