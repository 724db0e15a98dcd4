//! Scenario: Asset Tree Layouts
//!
//! The four canonical layouts: a marked asset root with one folder, no
//! marker at all, assets in a sibling directory, and root-level assets.

use assetgen::DiagnosticCode;

use crate::common::*;

/// SCENARIO A: marker plus one texture in a folder
#[test]
fn scenario_single_folder_under_marked_root() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Jungle/Monkey.png");

    let report = project.generate();

    assert!(!report.has_warnings());
    assert_eq!(
        project.artifact_names(),
        vec!["Assets.Jungle.cs", "Assets.default.g.cs"]
    );
    let jungle = project.artifact("Assets.Jungle.cs").unwrap();
    assert!(jungle.contains("public partial class Jungle {"));
    assert!(jungle.contains("public const string KEY_Monkey = \"Mod/Jungle/Monkey\";"));
    assert!(jungle.contains("ModContent.Request<Texture2D>(\"Mod/Jungle/Monkey\")"));
}

/// SCENARIO B: no marker, however many assets exist
#[test]
fn scenario_missing_marker_emits_only_warning_root() {
    let project = TestProject::new();
    project.touch("Assets/Jungle/Monkey.png");
    project.touch("Assets/Forest/Birch.png");
    project.touch("Assets/Fx/Glow.fxc");

    let report = project.generate();

    assert_eq!(report.artifact_count, 1);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].code, DiagnosticCode::MissingAssetRoot);
    assert_eq!(project.artifact_names(), vec!["Assets.default.g.cs"]);
    assert!(project
        .artifact("Assets.default.g.cs")
        .unwrap()
        .contains("#warning missing AssetRoot.txt file"));
}

/// SCENARIO C: sibling directory outside the root is ignored
#[test]
fn scenario_sibling_directory_is_excluded() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Jungle/Monkey.png");
    project.touch("AssetsOld/Jungle/Gorilla.png");
    project.touch("Other/Stray.png");

    let report = project.generate();

    assert!(report.diagnostics.is_empty());
    assert_eq!(report.stats.assets, 1);
    let jungle = project.artifact("Assets.Jungle.cs").unwrap();
    assert!(!jungle.contains("Gorilla"));
    assert!(!project
        .artifact_names()
        .iter()
        .any(|name| name.contains("Other")));
}

/// SCENARIO D: root-level file lands in the default group artifact
#[test]
fn scenario_root_level_asset_has_no_nested_class() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Logo.png");

    project.generate();

    assert_eq!(
        project.artifact_names(),
        vec!["Assets.default.g.cs", "Assets.g.cs"]
    );
    let module = project.artifact("Assets.g.cs").unwrap();
    assert!(!module.contains("public partial class"));
    assert!(module.contains("partial class Assets {\n    public const string KEY_Logo = \"Mod/Logo\";"));
}

/// SCENARIO: effects and nested folders in one tree
#[test]
fn scenario_mixed_kinds_and_nesting() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Forest/_Trees/Birch.png");
    project.touch("Assets/Fx/Glow.fxc");

    project.generate();

    let trees = project.artifact("Assets.Forest._Trees.cs").unwrap();
    assert!(trees.contains("    public partial class Forest {\n        public partial class _Trees {\n"));
    let fx = project.artifact("Assets.Fx.cs").unwrap();
    assert!(fx.contains("AssetRequestMode.ImmediateLoad"));
    assert!(fx.contains("public static EffectAsset Glow { get; } = Glow_lazy.Value;"));
}
