//! # sicbo-core
//!
//! Foundation crate for the sicbo pick predictor.
//! Defines the request/response records, the pick label, the model trait,
//! errors, config, and constants. Every other crate in the workspace depends
//! on this.
//!
//! `PickResponse::parse` and `Pick`'s `FromStr` are for callers that read a
//! pick back. The `sicbo-pick` binary only writes one.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PickConfig;
pub use errors::{PickError, PickResult};
pub use models::{FeatureMatrix, HistoryRequest, Outcome, Pick, PickResponse};
pub use traits::PickModel;
