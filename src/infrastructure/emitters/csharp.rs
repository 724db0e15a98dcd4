//! C# emitter for tModLoader asset registries
//!
//! Output shape for a group `Forest/_Trees` in assembly `Mod`:
//!
//! ```text
//! namespace Mod.Assets;
//!
//! partial class Assets {
//!     public partial class Forest {
//!         public partial class _Trees {
//!             public const string KEY_Birch = "Mod/Forest/_Trees/Birch";
//!             public readonly static Lazy<ImageAsset> Birch_lazy = ...;
//!             public static ImageAsset Birch => Birch_lazy.Value;
//!         }
//!     }
//! }
//! ```

use crate::config::GeneratorSection;
use crate::domain::entities::{AssetFile, DirectoryGroup};
use crate::domain::ports::ArtifactEmitter;
use crate::domain::value_objects::{path, AssetKind, LoadPolicy};

use super::writer::IndentedWriter;

/// First line of the root declaration and the usings file
const AUTO_GENERATED: &str = "// <auto-generated/>";
/// First line of every group module
const DISCLAIMER: &str = "#region disclaimer";

const USINGS: &[&str] = &[
    "using ReLogic.Content;",
    "using Microsoft.Xna.Framework.Graphics;",
    "using Terraria.ModLoader;",
    "using System;",
];

const ALIASES: &[&str] = &[
    "using ImageAsset = ReLogic.Content.Asset<Microsoft.Xna.Framework.Graphics.Texture2D>;",
    "using EffectAsset = ReLogic.Content.Asset<Microsoft.Xna.Framework.Graphics.Effect>;",
];

/// Emits partial C# classes with lazy `ModContent.Request` accessors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSharpEmitter {
    namespace: String,
    tool_name: String,
    tool_version: String,
}

impl CSharpEmitter {
    pub fn new(
        namespace: impl Into<String>,
        tool_name: impl Into<String>,
        tool_version: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
        }
    }

    pub fn from_settings(settings: &GeneratorSection) -> Self {
        Self::new(
            settings.namespace.as_str(),
            settings.tool_name.as_str(),
            settings.tool_version.as_str(),
        )
    }

    fn write_disclaimer(&self, w: &mut IndentedWriter) {
        w.line(DISCLAIMER).line("/*").line("<auto-generated/>");
        w.indent();
        w.line_fmt(format_args!("this code was generated by {}.", self.tool_name));
        w.line("changes to this file will be lost when the code is regenerated.");
        w.dedent();
        w.line("*/").line("#endregion disclaimer");
    }

    fn write_asset(&self, w: &mut IndentedWriter, asset: &AssetFile, assembly_name: &str) {
        let name = asset.name();
        let key = asset.key(assembly_name);
        let (handle, kind) = match asset.kind() {
            AssetKind::Texture2D => ("ImageAsset", "Texture2D"),
            AssetKind::Effect => ("EffectAsset", "Effect"),
        };

        w.line_fmt(format_args!("public const string KEY_{} = \"{}\";", name, key));
        match asset.kind().load_policy() {
            LoadPolicy::Deferred => {
                w.line_fmt(format_args!(
                    "public readonly static Lazy<{handle}> {name}_lazy = new(() => ModContent.Request<{kind}>(\"{key}\"));"
                ));
                w.line_fmt(format_args!(
                    "public static {handle} {name} => {name}_lazy.Value;"
                ));
            }
            LoadPolicy::Immediate => {
                w.line_fmt(format_args!(
                    "public readonly static Lazy<{handle}> {name}_lazy = new(() => ModContent.Request<{kind}>(\"{key}\", AssetRequestMode.ImmediateLoad));"
                ));
                w.line_fmt(format_args!(
                    "public static {handle} {name} {{ get; }} = {name}_lazy.Value;"
                ));
            }
        }
    }
}

impl Default for CSharpEmitter {
    fn default() -> Self {
        Self::from_settings(&GeneratorSection::default())
    }
}

impl ArtifactEmitter for CSharpEmitter {
    fn id(&self) -> &'static str {
        "csharp"
    }

    fn root_declaration(&self, assembly_name: &str, warning: Option<&str>) -> String {
        let ns = &self.namespace;
        let mut w = IndentedWriter::acquire();
        w.line(AUTO_GENERATED);
        w.line_fmt(format_args!("namespace {assembly_name}.{ns};"));
        w.line_fmt(format_args!(
            "[System.CodeDom.Compiler.GeneratedCodeAttribute(\"{}\", \"{}\")]",
            self.tool_name, self.tool_version
        ));
        w.line_fmt(format_args!("partial class {ns};"));
        if let Some(warning) = warning {
            w.line_fmt(format_args!("#warning {warning}"));
        }
        w.finish()
    }

    fn group_module(&self, group: &DirectoryGroup, assembly_name: &str) -> String {
        let mut w = IndentedWriter::acquire();

        self.write_disclaimer(&mut w);
        w.blank();
        for using in USINGS {
            w.line(using);
        }
        w.blank();
        for alias in ALIASES {
            w.line(alias);
        }
        w.blank();
        w.line_fmt(format_args!("namespace {}.{};", assembly_name, self.namespace));
        w.blank();

        w.open(format_args!("partial class {}", self.namespace));
        let mut opened = 0;
        for segment in path::segments(group.key()) {
            w.open(format_args!("public partial class {segment}"));
            opened += 1;
        }

        for asset in group.members() {
            self.write_asset(&mut w, asset, assembly_name);
        }

        for _ in 0..opened {
            w.close();
        }
        w.close();

        w.finish()
    }

    fn global_usings(&self, assembly_name: &str) -> String {
        format!(
            "{}\nglobal using static {}.{}.{};\n",
            AUTO_GENERATED, assembly_name, self.namespace, self.namespace
        )
    }

    fn has_signature(&self, content: &str) -> bool {
        let first = content.lines().next().unwrap_or("").trim();
        first == AUTO_GENERATED || first == DISCLAIMER
    }
}
