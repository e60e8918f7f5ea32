//! Block storage volumes

mod api;
pub mod commands;
mod models;

pub use models::{CreateVolumeRequest, Volume};
