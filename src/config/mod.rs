//! Asset manifest (`assets.toml`).
//!
//! ```toml
//! [dispatch]
//! path = "/assets"       # base path joined to local sources
//! versioning = true      # append ?mtime to local sources
//!
//! [[groups.style]]
//! name = "site"
//! source = "css/site.css"
//! dependencies = ["reset"]
//! attributes = { media = "screen" }
//!
//! [[groups.script]]
//! name = "app"
//! source = "js/app.js"
//! attributes = { defer = "" }
//! ```
//!
//! Groups keep the order their assets are written in; that order breaks ties
//! between assets with no dependency relation.

mod error;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use util::{find_config_file, find_config_file_from};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::asset::{Group, Groups};
use crate::dispatch::Dispatcher;
use crate::freshness::FileMetadata;
use crate::log;
use crate::render::HtmlRenderer;
use crate::resolver::DependencyResolver;

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "assets.toml";

// ============================================================================
// sections
// ============================================================================

/// `[dispatch]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Base path for local sources. Trailing slashes are stripped.
    pub path: String,
    /// Start with mtime versioning enabled.
    pub versioning: bool,
}

// ============================================================================
// root configuration
// ============================================================================

/// Root structure of `assets.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Absolute path to the manifest file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory holding the manifest (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Dispatcher settings
    pub dispatch: DispatchConfig,

    /// Group name → assets, e.g. `style` and `script`
    pub groups: Groups,
}

impl Manifest {
    /// Load and validate a manifest file. Unknown fields are reported as
    /// warnings and otherwise ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut manifest, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        manifest.config_path = path.to_path_buf();
        manifest.root = path.parent().map(Path::to_path_buf).unwrap_or_default();

        manifest.validate()?.print_warnings();
        Ok(manifest)
    }

    /// Parse a manifest from a TOML string (no validation).
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let manifest = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((manifest, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Check every group.
    ///
    /// Errors: empty asset names or sources. Warnings: dependencies naming an
    /// asset outside the group (they are skipped when ordering).
    pub fn validate(&self) -> Result<ConfigDiagnostics, ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        let mut names: Vec<&String> = self.groups.keys().collect();
        names.sort();
        for name in names {
            Self::validate_group(name, &self.groups[name], &mut diag);
        }

        diag.into_result()
    }

    fn validate_group(name: &str, group: &Group, diag: &mut ConfigDiagnostics) {
        for (i, asset) in group.iter().enumerate() {
            let field = format!("groups.{name}[{i}]");

            if asset.name.trim().is_empty() {
                diag.error_with_hint(
                    format!("{field}.name"),
                    "asset name is empty",
                    "dependencies refer to assets by name; give every asset one",
                );
            }
            if asset.source.trim().is_empty() {
                diag.error(format!("{field}.source"), "asset source is empty");
            }
            for dep in asset.dependencies.iter().filter(|d| !group.contains(d)) {
                diag.warn(
                    format!("{field}.dependencies"),
                    format!("`{}` is not in group `{name}` and will be ignored", dep),
                );
            }
        }
    }

    /// Build a dispatcher configured from `[dispatch]`.
    pub fn dispatcher<R: HtmlRenderer, M: FileMetadata>(
        &self,
        renderer: R,
        files: M,
    ) -> Dispatcher<R, M> {
        let mut dispatcher =
            Dispatcher::new(renderer, files, DependencyResolver::new(), &self.dispatch.path);
        if self.dispatch.versioning {
            dispatcher.enable_versioning();
        }
        dispatcher
    }

    /// Group names, sorted.
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freshness::FsMetadata;
    use crate::render::HtmlBuilder;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[dispatch]
path = "/assets/"
versioning = true

[[groups.style]]
name = "site"
source = "css/site.css"
dependencies = ["reset"]

[[groups.style]]
name = "reset"
source = "css/reset.css"
attributes = { media = "screen", title = "base" }

[[groups.script]]
name = "app"
source = "js/app.js"
dependencies = ["jquery"]
"#;

    #[test]
    fn test_parse_sample() {
        let manifest = Manifest::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.dispatch.path, "/assets/");
        assert!(manifest.dispatch.versioning);
        assert_eq!(manifest.group_names(), vec!["script", "style"]);

        let style = &manifest.groups["style"];
        let names: Vec<_> = style.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["site", "reset"]);

        let attrs: Vec<_> = style.get("reset").unwrap().attributes.iter().collect();
        assert_eq!(attrs, vec![("media", "screen"), ("title", "base")]);
    }

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert_eq!(manifest.dispatch, DispatchConfig::default());
        assert!(manifest.groups.is_empty());
    }

    #[test]
    fn test_validate_warns_on_unknown_dependency() {
        let manifest = Manifest::from_str(SAMPLE).unwrap();
        let diag = manifest.validate().unwrap();
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field, "groups.script[0].dependencies");
        assert!(diag.warnings()[0].message.contains("`jquery`"));
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let manifest = Manifest::from_str(
            r#"
[[groups.script]]
name = ""
source = " "
"#,
        )
        .unwrap();
        let Err(ConfigError::Diagnostics(diag)) = manifest.validate() else {
            panic!("expected diagnostics");
        };
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["groups.script[0].name", "groups.script[0].source"]);
    }

    #[test]
    fn test_load_collects_unknown_fields() {
        let (_, ignored) = Manifest::parse_with_ignored(
            r#"
[dispatch]
path = "/a"
verisoning = true
"#,
        )
        .unwrap();
        assert_eq!(ignored, vec!["dispatch.verisoning"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_MANIFEST);
        fs::write(&path, SAMPLE).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.config_path, path);
        assert_eq!(manifest.root, dir.path());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Manifest::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_dispatcher_from_manifest() {
        let manifest = Manifest::from_str(SAMPLE).unwrap();
        let dispatcher = manifest.dispatcher(HtmlBuilder, FsMetadata);
        assert_eq!(dispatcher.base_path(), "/assets");
        assert!(dispatcher.is_versioning());
    }
}
