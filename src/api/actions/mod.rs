//! Server-side asynchronous actions

mod api;
pub mod commands;
mod models;

pub use models::{Action, ActionStatus};
