//! # sicbo-cli
//!
//! Process glue for the `sicbo-pick` binary: install-directory lookup,
//! tracing setup, and the single stdin → stdout exchange.

pub mod app;
pub mod tracing_setup;

pub use app::{install_dir, respond};
