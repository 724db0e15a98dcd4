#![no_main]

use assetgen::domain::value_objects::path;
use assetgen::AssetFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let normalized = path::normalize_separators(raw);
        let _ = path::folder(&normalized);
        let _ = path::file_name_without_extension(&normalized);
        let _ = path::segments(&normalized).count();

        let stripped = path::remove_extension(&normalized);
        if let Some(ext) = path::extension(&normalized) {
            assert_eq!(format!("{stripped}{ext}"), normalized.as_ref());
        }

        // recognized paths must always classify
        if assetgen::AssetKind::is_recognized_path(&normalized) {
            assert!(AssetFile::from_relative(&normalized, "Assets").is_ok());
        }
    }
});
