//! History → feature matrix.
//!
//! `'T'` is the tracked event and encodes to 1.0. Every other character,
//! `'X'` and unrecognised input included, encodes to 0.0. Nothing is rejected.

use sicbo_core::constants::{TRACKED_EVENT, TRACKED_VALUE, UNTRACKED_VALUE};
use sicbo_core::FeatureMatrix;

/// Encode a history string as a `[1, chars]` matrix.
pub fn encode_history(history: &str) -> FeatureMatrix {
    FeatureMatrix::from_row(history.chars().map(encode_char).collect())
}

#[inline]
pub fn encode_char(c: char) -> f32 {
    if c == TRACKED_EVENT {
        TRACKED_VALUE
    } else {
        UNTRACKED_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_history() {
        let m = encode_history("TXTTX");
        assert_eq!(m.shape(), [1, 5]);
        assert_eq!(m.row(), &[1.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn empty_history_has_zero_columns() {
        let m = encode_history("");
        assert_eq!(m.shape(), [1, 0]);
        assert!(m.is_empty());
    }

    #[test]
    fn unknown_and_lowercase_are_untracked() {
        let m = encode_history("t?T\u{df}");
        assert_eq!(m.row(), &[0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn columns_count_chars_not_bytes() {
        let m = encode_history("T\u{e0}i");
        assert_eq!(m.columns(), 3);
    }
}
