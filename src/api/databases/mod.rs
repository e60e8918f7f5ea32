//! Managed database clusters

mod api;
pub mod commands;
mod models;

pub use models::{CreateDatabaseRequest, Database};
