//! Account and billing balance

mod api;
pub mod commands;
mod models;

pub use models::{Account, Balance};
