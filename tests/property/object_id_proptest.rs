//! Property-based tests for ObjectId
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;

use mesto::shared::ObjectId;

proptest! {
    #[test]
    fn test_any_24_hex_chars_parse(raw in "[0-9a-fA-F]{24}") {
        let id = ObjectId::parse(&raw).unwrap();
        prop_assert_eq!(id.as_str(), raw.to_lowercase());
    }

    #[test]
    fn test_wrong_length_is_rejected(raw in "[0-9a-f]{0,23}|[0-9a-f]{25,40}") {
        prop_assert!(ObjectId::parse(&raw).is_err());
    }

    #[test]
    fn test_non_hex_is_rejected(
        prefix in "[0-9a-f]{0,23}",
        bad in "[g-zG-Z_ -]",
    ) {
        let mut raw = prefix.clone();
        raw.push_str(&bad);
        while raw.len() < 24 {
            raw.push('0');
        }
        prop_assert!(ObjectId::parse(&raw).is_err());
    }

    #[test]
    fn test_json_string_form(raw in "[0-9a-f]{24}") {
        let id = ObjectId::parse(&raw).unwrap();
        prop_assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::Value::String(raw));
    }
}

#[test]
fn test_generated_ids_are_distinct() {
    let ids: std::collections::HashSet<_> = (0..1000).map(|_| ObjectId::generate()).collect();
    assert_eq!(ids.len(), 1000);
}
