use crate::errors::PickResult;
use crate::models::FeatureMatrix;

/// A loaded classification model that scores a history.
pub trait PickModel: Send + Sync {
    /// Run one forward pass, returning one score per output category.
    fn scores(&self, features: &FeatureMatrix) -> PickResult<Vec<f32>>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
