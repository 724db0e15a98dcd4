//! Property tests for whole generation passes.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use assetgen::{
    generate, CSharpEmitter, CancellationToken, GeneratorSection, IncrementalGenerator,
};

fn project() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        (
            prop_oneof![Just("Jungle"), Just("Forest"), Just("Forest/Trees"), Just("")],
            // mixed first letter so passes also see case-only renames
            "[A-Za-z][a-z]{0,6}",
            prop_oneof![Just(".png"), Just(".fxc"), Just(".txt"), Just(".cs")],
        ),
        0..=12,
    )
    .prop_map(|files| {
        let mut paths = vec!["proj/Assets/AssetRoot.txt".to_string()];
        let mut members = HashSet::new();
        for (folder, stem, ext) in files {
            let is_asset = matches!(ext, ".png" | ".fxc");
            // one accessor per stem and folder, or the pass is rejected
            if is_asset && !members.insert((folder, stem.clone())) {
                continue;
            }
            if folder.is_empty() {
                paths.push(format!("proj/Assets/{stem}{ext}"));
            } else {
                paths.push(format!("proj/Assets/{folder}/{stem}{ext}"));
            }
        }
        paths
    })
}

fn emitter() -> Arc<CSharpEmitter> {
    Arc::new(CSharpEmitter::default())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a pass is deterministic for a given input list.
    #[test]
    fn property_generation_is_deterministic(files in project()) {
        let settings = GeneratorSection::default();
        let a = generate(&files, "Mod", &settings, emitter()).unwrap();
        let b = generate(&files, "Mod", &settings, emitter()).unwrap();

        let left: Vec<_> = a.artifacts.iter().map(|x| &x.artifact).collect();
        let right: Vec<_> = b.artifacts.iter().map(|x| &x.artifact).collect();
        prop_assert_eq!(left, right);
    }

    /// PROPERTY: incremental output equals from-scratch output.
    #[test]
    fn property_incremental_matches_scratch(first in project(), second in project()) {
        let settings = GeneratorSection::default();
        let mut generator = IncrementalGenerator::new(settings.clone(), emitter());
        let cancel = CancellationToken::new();

        generator.run(&first, "Mod", &cancel).unwrap();
        let incremental = generator.run(&second, "Mod", &cancel).unwrap();
        let scratch = generate(&second, "Mod", &settings, emitter()).unwrap();

        let left: Vec<_> = incremental.artifacts.iter().map(|x| &x.artifact).collect();
        let right: Vec<_> = scratch.artifacts.iter().map(|x| &x.artifact).collect();
        prop_assert_eq!(left, right);
    }

    /// PROPERTY: a repeated pass recomputes nothing.
    #[test]
    fn property_repeat_pass_reuses_everything(files in project()) {
        let mut generator = IncrementalGenerator::new(GeneratorSection::default(), emitter());
        let cancel = CancellationToken::new();

        let first = generator.run(&files, "Mod", &cancel).unwrap();
        let second = generator.run(&files, "Mod", &cancel).unwrap();

        prop_assert_eq!(second.stats.artifacts_recomputed, 0);
        prop_assert_eq!(second.stats.artifacts_reused, first.artifacts.len());
        prop_assert!(second.removed.is_empty());
    }

    /// PROPERTY: every artifact name is unique within a pass.
    #[test]
    fn property_artifact_names_unique(files in project()) {
        let output = generate(&files, "Mod", &GeneratorSection::default(), emitter()).unwrap();
        let mut names: Vec<&str> = output.names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), total);
    }
}
