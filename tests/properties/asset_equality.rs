//! Property tests for the AssetFile equality contract.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use assetgen::domain::value_objects::{FingerprintHasher, StableHash};
use assetgen::AssetFile;

fn std_hash(asset: &AssetFile) -> u64 {
    let mut hasher = DefaultHasher::new();
    asset.hash(&mut hasher);
    hasher.finish()
}

fn fingerprint(asset: &AssetFile) -> String {
    let mut hasher = FingerprintHasher::new();
    asset.stable_hash(&mut hasher);
    hasher.finish().to_hex()
}

fn relative() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec("[A-Za-z]{1,8}", 0..=3),
        "[A-Za-z]{1,8}",
        prop_oneof![Just(".png"), Just(".fxc")],
    )
        .prop_map(|(folders, stem, ext)| {
            let mut path = folders.join("/");
            if !path.is_empty() {
                path.push('/');
            }
            format!("{path}{stem}{ext}")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: casing changes keep assets equal with identical hashes.
    #[test]
    fn property_case_variants_are_equal(rel in relative()) {
        let a = AssetFile::from_relative(&rel, "Assets").unwrap();
        let b = AssetFile::from_relative(&rel.to_uppercase(), "Assets").unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(std_hash(&a), std_hash(&b));
        prop_assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    /// PROPERTY: equality agrees with case-folded (path, extension).
    #[test]
    fn property_equality_matches_folded_paths(x in relative(), y in relative()) {
        let a = AssetFile::from_relative(&x, "Assets").unwrap();
        let b = AssetFile::from_relative(&y, "Assets").unwrap();

        prop_assert_eq!(a == b, x.to_lowercase() == y.to_lowercase());
        if a == b {
            prop_assert_eq!(std_hash(&a), std_hash(&b));
        }
    }

    /// PROPERTY: derived fields follow from the path.
    #[test]
    fn property_derived_fields_follow_path(rel in relative()) {
        let asset = AssetFile::from_relative(&rel, "").unwrap();
        let expected_folder = rel.rfind('/').map(|i| &rel[..i]).unwrap_or("");

        prop_assert_eq!(asset.folder(), expected_folder);
        prop_assert!(asset.path().ends_with(asset.name()));
        prop_assert_eq!(format!("{}{}", asset.path(), asset.extension()), rel);
    }
}
