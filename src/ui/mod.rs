//! Terminal interaction helpers: spinners and confirmation prompts

mod confirm;
mod spinner;

pub use confirm::confirm_delete;
pub use spinner::{create_spinner, finish_spinner};
