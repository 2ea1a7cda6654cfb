//! Configuration for the pick predictor.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod defaults;
pub mod pick_config;

pub use pick_config::PickConfig;
