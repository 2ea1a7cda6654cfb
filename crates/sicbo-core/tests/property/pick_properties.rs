use proptest::prelude::*;
use sicbo_core::{Pick, PickResponse};

proptest! {
    #[test]
    fn every_index_maps_to_a_label(index in any::<usize>()) {
        let pick = Pick::from_index(index);
        if index > 1 {
            prop_assert_eq!(pick, Pick::Skip);
        }
    }

    #[test]
    fn label_parse_ignores_case(index in 0usize..3, mask in any::<u8>()) {
        let pick = Pick::from_index(index);
        let mixed: String = pick
            .as_str()
            .chars()
            .enumerate()
            .map(|(i, c)| if mask >> (i % 8) & 1 == 1 { c.to_ascii_lowercase() } else { c })
            .collect();
        prop_assert_eq!(mixed.parse::<Pick>().unwrap(), pick);
    }

    #[test]
    fn arbitrary_text_never_panics_response_parse(s in ".{0,64}") {
        let response = PickResponse::parse(&s);
        let json = response.to_json_string().unwrap();
        let well_formed = json.starts_with(r#"{"pick": ""#) && json.ends_with(r#""}"#);
        prop_assert!(well_formed, "unexpected payload: {}", json);
    }
}
