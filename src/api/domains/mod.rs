//! DNS domains and records

mod api;
pub mod commands;
mod models;

pub use models::{CreateRecordRequest, Domain, DomainRecord};
