#![no_main]

use std::sync::Arc;

use assetgen::{generate, CSharpEmitter, GenerateError, GeneratorSection};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let files: Vec<&str> = text.lines().collect();
        let emitter = Arc::new(CSharpEmitter::default());
        match generate(&files, "Mod", &GeneratorSection::default(), emitter) {
            Ok(output) => assert!(output.artifact("Assets.default.g.cs").is_some()),
            // folders like `a.b` and `a/b` legitimately collide, as do
            // `x.png` and `x.fxc` in one folder
            Err(GenerateError::DuplicateArtifactName { .. })
            | Err(GenerateError::DuplicateMemberName { .. }) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
});
