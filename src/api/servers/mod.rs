//! Compute instances

mod api;
pub mod commands;
mod models;

pub use models::{CreateServerRequest, Image, Networks, NetworkV4, Server};
