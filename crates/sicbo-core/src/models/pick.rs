use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// The predicted label. `Skip` doubles as the explicit no-recommendation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pick {
    Tai,
    Xiu,
    Skip,
}

impl Pick {
    /// Map a model output category to a label. Unknown indices are `Skip`.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Tai,
            1 => Self::Xiu,
            _ => Self::Skip,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tai => "TAI",
            Self::Xiu => "XIU",
            Self::Skip => "SKIP",
        }
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, surrounding whitespace ignored.
impl FromStr for Pick {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [Self::Tai, Self::Xiu, Self::Skip]
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InputError::Malformed {
                reason: format!("unknown pick label: {trimmed:?}"),
            })
    }
}
