use super::{InputError, ModelError};

/// Top-level error for a pick attempt.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("pipeline panicked: {message}")]
    Panicked { message: String },
}

/// Convenience alias used across the workspace.
pub type PickResult<T> = Result<T, PickError>;
