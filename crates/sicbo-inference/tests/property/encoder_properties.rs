use proptest::prelude::*;
use sicbo_core::{Outcome, Pick};
use sicbo_inference::{encode_history, run};

proptest! {
    #[test]
    fn one_column_per_char(s in ".{0,64}") {
        let m = encode_history(&s);
        prop_assert_eq!(m.shape(), [1, s.chars().count()]);
    }

    #[test]
    fn only_t_is_tracked(s in ".{0,64}") {
        let m = encode_history(&s);
        for (c, v) in s.chars().zip(m.row()) {
            let expected = if c == 'T' { 1.0 } else { 0.0 };
            prop_assert_eq!(*v, expected);
        }
    }

    #[test]
    fn tx_histories_encode_exactly(s in "[TX]{0,32}") {
        let m = encode_history(&s);
        let ones = m.row().iter().filter(|v| **v == 1.0).count();
        prop_assert_eq!(ones, s.matches('T').count());
    }

    #[test]
    fn without_a_model_everything_skips(s in ".{0,64}") {
        let outcome = run(&s, None);
        prop_assert_eq!(outcome, Outcome::Fallback);
        prop_assert_eq!(outcome.pick(), Pick::Skip);
    }
}
