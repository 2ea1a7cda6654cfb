//! Error handling for the pick predictor.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod input_error;
pub mod model_error;
pub mod pick_error;

pub use config_error::ConfigError;
pub use input_error::InputError;
pub use model_error::ModelError;
pub use pick_error::{PickError, PickResult};
