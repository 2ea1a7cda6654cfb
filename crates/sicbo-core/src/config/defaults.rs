// Single source of truth for all default values.

// --- Model ---
pub const DEFAULT_MODEL_FILENAME: &str = "sicbo_core.onnx";
pub const DEFAULT_INTRA_THREADS: usize = 1;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "off";
