//! # sicbo-inference
//!
//! Turns a history request into a pick.
//!
//! ## Pipeline
//!
//! | Step | Module | Failure |
//! |------|--------|---------|
//! | Parse | `sicbo_core::HistoryRequest` | `InputError::Malformed` |
//! | Encode | `encoder` | none, total |
//! | Infer | `PickModel::scores` | `ModelError::*` |
//! | Map | `predictor` | `ModelError::EmptyScores` / `NanScore` |
//!
//! Any failure, including a panic, becomes `Outcome::Fallback`.

pub mod encoder;
pub mod loader;
pub mod pipeline;
pub mod predictor;
pub mod providers;

pub use encoder::encode_history;
pub use loader::load_model;
pub use pipeline::run;
pub use predictor::predict;
pub use providers::OnnxModel;
