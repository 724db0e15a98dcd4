//! Scenario: Project Configuration
//!
//! A project customizes marker, namespace and output through
//! `assetgen.toml`, and the generated tree follows.

use assetgen::config;

use crate::common::*;

#[test]
fn scenario_custom_namespace_and_marker() {
    let project = TestProject::new();
    project.write(
        "assetgen.toml",
        r#"
[generator]
marker_file = "ContentRoot.txt"
namespace = "Content"
emit_global_usings = true

[output]
directory = "Generated"
"#,
    );
    project.touch("Content/ContentRoot.txt");
    project.touch("Content/Jungle/Monkey.png");

    let report = project.use_case().execute(&project.options()).unwrap();

    assert!(!report.has_warnings());
    let out = project.path("Generated");
    assert!(out.join("Content.default.g.cs").exists());
    assert!(out.join("_Usings.g.cs").exists());
    let jungle = std::fs::read_to_string(out.join("Content.Jungle.cs")).unwrap();
    assert!(jungle.contains("namespace Mod.Content;"));
    assert!(jungle.contains("partial class Content {"));
}

#[test]
fn scenario_unknown_config_key_warns() {
    let project = TestProject::new();
    project.write("assetgen.toml", "[generator]\nmarker_files = \"X.txt\"\n");

    let (config, warnings) = config::resolve(project.root(), None).unwrap();

    assert_eq!(config.generator.marker_file, "AssetRoot.txt");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "generator.marker_files");
    assert_eq!(warnings[0].suggestion.as_deref(), Some("marker_file"));
}

#[test]
fn scenario_invalid_config_fails_with_path() {
    let project = TestProject::new();
    project.write("assetgen.toml", "[generator]\nnamespace = 42\n");

    let err = config::resolve(project.root(), None).unwrap_err();

    assert!(format!("{err:#}").contains("assetgen.toml"));
}
