//! parse → encode → infer → map, collapsed to a single `Outcome`.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use sicbo_core::errors::{ModelError, PickError, PickResult};
use sicbo_core::{HistoryRequest, Outcome, Pick, PickModel};
use tracing::debug;

use crate::encoder::encode_history;
use crate::predictor::predict;

/// Run one pick attempt over raw stdin text.
///
/// Never fails and never panics: every error, and any panic raised by the
/// model, becomes `Outcome::Fallback`.
pub fn run(raw: &str, model: Option<&dyn PickModel>) -> Outcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| attempt(raw, model)))
        .unwrap_or_else(|payload| {
            Err(PickError::Panicked {
                message: panic_message(payload.as_ref()),
            })
        });

    if let Err(e) = &result {
        debug!(error = %e, "pick attempt failed, falling back to SKIP");
    }

    Outcome::from(result)
}

/// The fallible steps, in order. The first error short-circuits.
pub fn attempt(raw: &str, model: Option<&dyn PickModel>) -> PickResult<Pick> {
    let request = HistoryRequest::parse(raw)?;
    let model = model.ok_or(ModelError::NotLoaded)?;
    let features = encode_history(&request.history);
    predict(model, &features)
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
