//! Scores → label.

use sicbo_core::errors::{ModelError, PickResult};
use sicbo_core::{FeatureMatrix, Pick, PickModel};
use tracing::debug;

/// Score `features` with `model` and map the best category to a label.
///
/// An empty history is rejected before the model is called; a zero-width
/// input has nothing to score.
pub fn predict(model: &dyn PickModel, features: &FeatureMatrix) -> PickResult<Pick> {
    if features.is_empty() {
        return Err(ModelError::EmptyFeatures.into());
    }

    let scores = model.scores(features)?;
    let index = argmax(&scores)?;
    let pick = Pick::from_index(index);

    debug!(
        model = model.name(),
        columns = features.columns(),
        ?scores,
        index,
        %pick,
        "history scored"
    );

    Ok(pick)
}

/// Index of the highest score. The first maximum wins ties.
///
/// # Errors
/// `ModelError::EmptyScores` for an empty slice, `ModelError::NanScore` if
/// any score is NaN.
pub fn argmax(scores: &[f32]) -> PickResult<usize> {
    if let Some(index) = scores.iter().position(|s| s.is_nan()) {
        return Err(ModelError::NanScore { index }.into());
    }

    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }

    best.map(|(i, _)| i).ok_or_else(|| ModelError::EmptyScores.into())
}
