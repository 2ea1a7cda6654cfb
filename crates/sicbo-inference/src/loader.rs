//! One-shot model acquisition.
//!
//! The loader never fails: a missing artifact, a rejected file, an absent
//! ONNX Runtime library, or a panic inside the runtime all leave the model
//! unset. Callers see `None` and every pick becomes `SKIP`.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use sicbo_core::PickModel;
use tracing::{info, warn};

use crate::pipeline::panic_message;
use crate::providers::OnnxModel;

/// Load the pick model at `path`, or `None` if it cannot be used.
pub fn load_model(path: &Path, intra_threads: usize) -> Option<Box<dyn PickModel>> {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| OnnxModel::load(path, intra_threads)));

    match attempt {
        Ok(Ok(model)) => {
            info!(model = model.name(), path = %path.display(), "pick model ready");
            Some(Box::new(model))
        }
        Ok(Err(e)) => {
            warn!(error = %e, "pick model unavailable, all picks will be SKIP");
            None
        }
        Err(payload) => {
            warn!(
                path = %path.display(),
                panic = %panic_message(payload.as_ref()),
                "model runtime panicked during load, all picks will be SKIP"
            );
            None
        }
    }
}
