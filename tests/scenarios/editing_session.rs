//! Scenario: Editing Session
//!
//! Journey: a developer keeps the generator running while editing assets.
//!
//! Steps:
//! 1. Initial generation writes every artifact
//! 2. Adding a texture rewrites only that folder's artifact
//! 3. Deleting a folder's last texture deletes its artifact
//! 4. A restart (fresh process) trusts the manifest and rewrites nothing
//!
//! Success Criteria:
//! - Other folders' artifacts are byte-identical across every step
//! - Cleanup never deletes a file the generator did not write

use std::fs;

use crate::common::*;

#[test]
fn scenario_edits_touch_only_their_folder() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Jungle/Monkey.png");
    project.touch("Assets/Forest/Birch.png");

    // Step 1
    let mut use_case = project.use_case();
    let report = use_case.execute(&project.options()).unwrap();
    assert_eq!(report.written.len(), 3);
    let forest_before = project.artifact("Assets.Forest.cs").unwrap();
    let forest_modified = fs::metadata(project.path("obj/assetgen/Assets.Forest.cs"))
        .unwrap()
        .modified()
        .unwrap();

    // Step 2
    project.touch("Assets/Jungle/Parrot.png");
    let report = use_case.execute(&project.options()).unwrap();
    assert_eq!(report.written.len(), 1);
    assert!(report.written[0].ends_with("Assets.Jungle.cs"));
    assert_eq!(report.stats.artifacts_recomputed, 1);
    assert!(project
        .artifact("Assets.Jungle.cs")
        .unwrap()
        .contains("KEY_Parrot"));
    assert_eq!(project.artifact("Assets.Forest.cs").unwrap(), forest_before);
    assert_eq!(
        fs::metadata(project.path("obj/assetgen/Assets.Forest.cs"))
            .unwrap()
            .modified()
            .unwrap(),
        forest_modified
    );

    // Step 3
    project.remove("Assets/Forest/Birch.png");
    let report = use_case.execute(&project.options()).unwrap();
    assert_eq!(report.removed.len(), 1);
    assert!(project.artifact("Assets.Forest.cs").is_none());

    // Step 4
    let report = project.generate();
    assert!(!report.has_changes());
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn scenario_deleted_artifact_is_restored() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Jungle/Monkey.png");
    project.generate();

    fs::remove_file(project.path("obj/assetgen/Assets.Jungle.cs")).unwrap();
    let report = project.generate();

    assert_eq!(report.written.len(), 1);
    assert!(project.artifact("Assets.Jungle.cs").is_some());
}

#[test]
fn scenario_ignore_file_hides_assets() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Jungle/Monkey.png");
    project.touch("Assets/Scratch/Draft.png");
    project.write(".assetgenignore", "Assets/Scratch/\n");

    project.generate();

    assert!(project.artifact("Assets.Scratch.cs").is_none());
    assert!(project.artifact("Assets.Jungle.cs").is_some());
}

#[test]
fn scenario_dry_run_previews_without_writing() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Jungle/Monkey.png");

    let report = project
        .use_case()
        .execute(&project.options().with_dry_run(true))
        .unwrap();

    assert_eq!(report.written.len(), 2);
    assert!(project.artifact_names().is_empty());
    assert!(!project.path("obj/assetgen/.assetgen.lock").exists());
}

#[test]
fn scenario_tampered_manifest_cannot_delete_sources() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Jungle/Monkey.png");
    project.write("src/Main.cs", "class Main {}\n");
    project.generate();

    let lock = project.path("obj/assetgen/.assetgen.lock");
    let mut manifest = fs::read_to_string(&lock).unwrap();
    manifest.push_str("\n[artifacts.\"../../src/Main.cs\"]\nhash = \"sha256:00\"\n");
    fs::write(&lock, manifest).unwrap();

    project.touch("src/Main.cs");
    let report = project.generate();

    assert!(report.removed.is_empty());
    assert!(project.path("src/Main.cs").exists());
    assert!(!fs::read_to_string(&lock).unwrap().contains("Main.cs"));
}

#[test]
fn scenario_hand_edited_artifact_survives_cleanup() {
    let project = TestProject::with_asset_root();
    project.touch("Assets/Jungle/Monkey.png");
    project.touch("Assets/Forest/Birch.png");
    project.generate();

    // the user took the file over and removed the generated header
    project.write("obj/assetgen/Assets.Forest.cs", "partial class Forest {}\n");
    project.remove("Assets/Forest/Birch.png");
    let report = project.generate();

    assert!(report.removed.is_empty());
    assert_eq!(
        project.artifact("Assets.Forest.cs").as_deref(),
        Some("partial class Forest {}\n")
    );
}
