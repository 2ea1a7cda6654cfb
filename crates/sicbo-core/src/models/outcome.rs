use super::{Pick, PickResponse};
use crate::errors::PickResult;

/// Terminal result of one pick attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The model produced a label.
    Predicted(Pick),
    /// Some step failed; serializes as `SKIP`.
    Fallback,
}

impl Outcome {
    pub fn pick(&self) -> Pick {
        match self {
            Self::Predicted(pick) => *pick,
            Self::Fallback => Pick::Skip,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }

    pub fn response(&self) -> PickResponse {
        PickResponse::new(self.pick())
    }
}

impl From<PickResult<Pick>> for Outcome {
    fn from(result: PickResult<Pick>) -> Self {
        match result {
            Ok(pick) => Self::Predicted(pick),
            Err(_) => Self::Fallback,
        }
    }
}
