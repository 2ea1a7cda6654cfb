//! ONNX Runtime pick model.
//!
//! Loads the classifier via the `ort` crate (v2). Input is a single `[1, n]`
//! float tensor; output is `[1, categories]` (or a flat `[categories]`).

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use sicbo_core::errors::{ModelError, PickResult};
use sicbo_core::{FeatureMatrix, PickModel};
use tracing::debug;

/// ONNX-based pick model using the `ort` crate.
pub struct OnnxModel {
    /// `Session::run` takes `&mut self`; the trait hands out `&self`.
    session: Mutex<Session>,
    model_name: String,
}

impl OnnxModel {
    /// Load an ONNX model from the given path.
    ///
    /// # Errors
    /// Returns `ModelError::LoadFailed` if the file is missing or the runtime
    /// rejects it.
    pub fn load(model_path: &Path, intra_threads: usize) -> PickResult<Self> {
        let display = model_path.display().to_string();
        if !model_path.is_file() {
            return Err(ModelError::LoadFailed {
                path: display,
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let load_failed = |reason: String| ModelError::LoadFailed {
            path: display.clone(),
            reason,
        };

        let session = Session::builder()
            .map_err(|e| load_failed(e.to_string()))?
            .with_intra_threads(intra_threads)
            .map_err(|e| load_failed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(e.to_string()))?;

        let model_name = model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, intra_threads, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            model_name,
        })
    }

    fn infer(&self, features: &FeatureMatrix) -> PickResult<Vec<f32>> {
        let [rows, cols] = features.shape();
        let input = Tensor::from_array((vec![rows as i64, cols as i64], features.row().to_vec()))
            .map_err(|e| ModelError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mut session = self.session.lock().map_err(|e| ModelError::InferenceFailed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| ModelError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| ModelError::InferenceFailed {
                reason: "no output tensor".to_string(),
            })?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::InferenceFailed {
                reason: format!("tensor extraction failed: {e}"),
            })?;

        first_row(shape, data)
    }
}

/// Scores from an extracted output: the first row of `[batch, categories]`,
/// or the whole of a flat `[categories]`.
fn first_row(shape: &[i64], data: &[f32]) -> PickResult<Vec<f32>> {
    match *shape {
        [_, categories] => {
            let categories =
                usize::try_from(categories).map_err(|_| ModelError::InferenceFailed {
                    reason: format!("negative category dimension: {shape:?}"),
                })?;
            let row = data.get(..categories).ok_or_else(|| ModelError::InferenceFailed {
                reason: format!("output shorter than its shape: {shape:?}"),
            })?;
            Ok(row.to_vec())
        }
        [_] => Ok(data.to_vec()),
        _ => Err(ModelError::InferenceFailed {
            reason: format!("unexpected output shape: {shape:?}"),
        }
        .into()),
    }
}

impl PickModel for OnnxModel {
    fn scores(&self, features: &FeatureMatrix) -> PickResult<Vec<f32>> {
        self.infer(features)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
