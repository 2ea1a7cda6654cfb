/// Model loading and inference errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model load failed: {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("model not loaded")]
    NotLoaded,

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("model returned no scores")]
    EmptyScores,

    #[error("model returned NaN at index {index}")]
    NanScore { index: usize },

    #[error("history is empty; nothing to score")]
    EmptyFeatures,
}
