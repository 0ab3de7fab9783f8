//! Property test: formatting then parsing a path yields the original
//! segments, for arbitrary segment content including `~`, `/`, and empty
//! strings.

use proptest::prelude::*;

proptest! {
    #[test]
    fn format_parse_roundtrip(path in proptest::collection::vec(".*", 0..8)) {
        let token = jera_pointer::format(&path);
        let parsed = jera_pointer::parse(&token).unwrap();
        prop_assert_eq!(parsed, path);
    }

    #[test]
    fn hostile_segments_roundtrip(path in proptest::collection::vec("[~/01]{0,6}", 0..5)) {
        let token = jera_pointer::format(&path);
        let parsed = jera_pointer::parse(&token).unwrap();
        prop_assert_eq!(parsed, path);
    }
}
