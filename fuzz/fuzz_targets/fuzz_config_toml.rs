#![no_main]

use std::path::Path;

use assetgen::config::parse_with_warnings;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing either succeeds or returns InvalidConfig, never panics
        let _ = parse_with_warnings(content, Path::new("assetgen.toml"));
    }
});
