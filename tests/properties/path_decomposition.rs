//! Property tests for path decomposition.

use proptest::prelude::*;

use assetgen::domain::value_objects::path;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_ \\-]{1,12}").unwrap()
}

fn relative_path() -> impl Strategy<Value = (Vec<String>, String, String)> {
    (
        proptest::collection::vec(segment(), 0..=4),
        segment(),
        prop_oneof![Just(".png".to_string()), Just(".fxc".to_string()), Just(".PNG".to_string())],
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: folder + name + extension reassemble the original path.
    #[test]
    fn property_decomposition_reassembles(
        (folders, stem, ext) in relative_path()
    ) {
        let mut full = folders.join("/");
        if !full.is_empty() {
            full.push('/');
        }
        full.push_str(&stem);
        full.push_str(&ext);

        let folder = path::folder(&full).unwrap_or("");
        prop_assert_eq!(folder, folders.join("/"));
        prop_assert_eq!(path::file_name_without_extension(&full), stem.as_str());
        prop_assert_eq!(path::extension(&full), Some(ext.as_str()));

        let stripped = path::remove_extension(&full);
        prop_assert_eq!(format!("{}{}", stripped, ext), full.clone());
    }

    /// PROPERTY: normalization removes every backslash and is idempotent.
    #[test]
    fn property_normalize_idempotent(raw in "[a-zA-Z/\\\\.]{0,40}") {
        let once = path::normalize_separators(&raw).into_owned();
        prop_assert!(!once.contains('\\'));
        let twice = path::normalize_separators(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: decomposition never panics on arbitrary input.
    #[test]
    fn property_decomposition_never_panics(raw in "(?s).{0,64}") {
        let _ = path::folder(&raw);
        let _ = path::file_name_without_extension(&raw);
        let _ = path::extension(&raw);
        let _ = path::remove_extension(&raw);
        let _ = path::ends_with_ignore_case(&raw, ".png");
        let _ = path::segments(&raw).count();
    }

    /// PROPERTY: segments never yield empty strings.
    #[test]
    fn property_segments_non_empty(raw in "[a-z/]{0,32}") {
        prop_assert!(path::segments(&raw).all(|s| !s.is_empty()));
    }
}
