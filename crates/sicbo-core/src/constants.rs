/// Predictor version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// History character treated as the tracked event. Encodes to 1.0.
pub const TRACKED_EVENT: char = 'T';

/// Feature value for the tracked event.
pub const TRACKED_VALUE: f32 = 1.0;

/// Feature value for every other character.
pub const UNTRACKED_VALUE: f32 = 0.0;

/// Environment variable overriding the model artifact path.
pub const ENV_MODEL_PATH: &str = "SICBO_MODEL_PATH";

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "SICBO_LOG";

/// Optional config file looked up next to the executable.
pub const CONFIG_FILENAME: &str = "sicbo.toml";
