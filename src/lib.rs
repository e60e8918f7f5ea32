//! nimbusctl - command-line client for the Nimbus Cloud API
//!
//! The crate is split into a transport layer ([`api`]) that speaks the
//! versioned REST API (authentication, rate budget tracking, pagination),
//! an output layer ([`output`]) that projects API resources into tables or
//! JSON, and a thin CLI layer ([`cli`]) wiring flags, config file, and
//! environment into commands.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod settings;
pub mod ui;

pub use api::Transport;
pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, Result};
