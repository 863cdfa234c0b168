use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tempfile::TempDir;

use super::Dispatcher;
use crate::AssetError;
use crate::asset::{AssetDefinition, Attributes, Group, Groups};
use crate::freshness::{FileMetadata, FsMetadata};
use crate::render::{HtmlBuilder, HtmlRenderer};
use crate::resolver::DependencyResolver;

/// In-memory mtimes keyed by the joined path.
#[derive(Default)]
struct FakeFiles(FxHashMap<PathBuf, u64>);

impl FakeFiles {
    fn with(mut self, path: &str, mtime: u64) -> Self {
        self.0.insert(PathBuf::from(path), mtime);
        self
    }
}

impl FileMetadata for FakeFiles {
    fn last_modified(&self, path: &Path) -> Option<u64> {
        self.0.get(path).copied()
    }
}

/// Renders `kind:source;` and remembers what it was asked.
#[derive(Default)]
struct Recorder(RefCell<Vec<(String, String, Attributes)>>);

impl HtmlRenderer for Recorder {
    fn render(
        &self,
        kind: &str,
        source: &str,
        attributes: &Attributes,
    ) -> Result<String, AssetError> {
        self.0
            .borrow_mut()
            .push((kind.into(), source.into(), attributes.clone()));
        Ok(format!("{kind}:{source};"))
    }
}

fn dispatcher(files: FakeFiles) -> Dispatcher<HtmlBuilder, FakeFiles> {
    Dispatcher::new(HtmlBuilder, files, DependencyResolver::new(), "/assets")
}

fn groups(name: &str, group: Group) -> Groups {
    let mut groups = Groups::default();
    groups.insert(name.to_string(), group);
    groups
}

// =============================================================================
// source_url
// =============================================================================

#[test]
fn test_local_source_joined_when_unversioned() {
    let d = dispatcher(FakeFiles::default().with("/assets/app.js", 1234));
    assert_eq!(d.source_url("app.js"), "/assets/app.js");
    assert_eq!(d.source_url("/app.js"), "/assets/app.js");
}

#[test]
fn test_versioned_local_source_keeps_original_string() {
    let mut d = dispatcher(FakeFiles::default().with("/assets/app.js", 1234));
    d.enable_versioning();
    assert_eq!(d.source_url("app.js"), "app.js?1234");
}

#[test]
fn test_versioned_without_mtime_falls_back_to_joined() {
    let mut d = dispatcher(FakeFiles::default().with("/assets/zero.js", 0));
    d.enable_versioning();
    assert_eq!(d.source_url("missing.js"), "/assets/missing.js");
    assert_eq!(d.source_url("zero.js"), "/assets/zero.js");
}

#[test]
fn test_remote_source_unchanged() {
    let files = FakeFiles::default().with("/assets/https://cdn.example.com/app.js", 99);
    let mut d = dispatcher(files);
    let url = "https://cdn.example.com/app.js";

    assert_eq!(d.source_url(url), url);
    d.enable_versioning();
    assert_eq!(d.source_url(url), url);
    assert_eq!(d.source_url("//cdn.example.com/a.js"), "//cdn.example.com/a.js");
}

#[test]
fn test_file_url_source_unchanged() {
    let mut d = dispatcher(FakeFiles::default().with("/assets/file:///var/www/app.js", 7));
    let url = "file:///var/www/app.js";

    assert_eq!(d.source_url(url), url);
    d.enable_versioning();
    assert_eq!(d.source_url(url), url);
    assert_eq!(d.source_url("c:/www/app.js"), "/assets/c:/www/app.js");
}

#[test]
fn test_remote_base_path_never_versioned() {
    let files = FakeFiles::default().with("https://cdn.example.com/app.js", 1234);
    let mut d = Dispatcher::new(
        HtmlBuilder,
        files,
        DependencyResolver::new(),
        "https://cdn.example.com/",
    );
    d.enable_versioning();
    assert_eq!(d.source_url("/app.js"), "https://cdn.example.com/app.js");
}

#[test]
fn test_versioning_toggle_persists() {
    let mut d = dispatcher(FakeFiles::default().with("/assets/app.js", 7));
    assert!(!d.is_versioning());

    d.enable_versioning();
    assert!(d.is_versioning());
    assert_eq!(d.source_url("app.js"), "app.js?7");
    assert_eq!(d.source_url("app.js"), "app.js?7");

    d.disable_versioning();
    assert_eq!(d.source_url("app.js"), "/assets/app.js");
}

#[test]
fn test_versioning_against_real_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("css")).unwrap();
    let file = dir.path().join("css/site.css");
    fs::write(&file, "body {}").unwrap();
    let mtime = FsMetadata.last_modified(&file).unwrap();

    let root = dir.path().to_str().unwrap();
    let mut d = Dispatcher::new(HtmlBuilder, FsMetadata, DependencyResolver::new(), root);
    d.enable_versioning();

    assert_eq!(d.source_url("css/site.css"), format!("css/site.css?{mtime}"));
    assert_eq!(d.source_url("css/gone.css"), format!("{root}/css/gone.css"));
}

// =============================================================================
// asset
// =============================================================================

#[test]
fn test_asset_none_is_empty() {
    let d = dispatcher(FakeFiles::default());
    assert_eq!(d.asset("script", None).unwrap(), "");
}

#[test]
fn test_asset_forwards_attributes() {
    let recorder = Recorder::default();
    let d = Dispatcher::new(&recorder, FakeFiles::default(), DependencyResolver::new(), "/x");
    let asset = AssetDefinition::new("app", "app.js")
        .with_attributes(Attributes::from([("defer", ""), ("data-main", "boot")]));

    assert_eq!(d.asset("script", Some(&asset)).unwrap(), "script:/x/app.js;");
    let calls = recorder.0.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "script");
    assert_eq!(calls[0].1, "/x/app.js");
    assert_eq!(calls[0].2, asset.attributes);
}

#[test]
fn test_asset_unknown_kind_propagates() {
    let d = dispatcher(FakeFiles::default());
    let asset = AssetDefinition::new("logo", "logo.png");
    assert_eq!(
        d.asset("image", Some(&asset)),
        Err(AssetError::UnknownKind("image".into()))
    );
}

// =============================================================================
// run
// =============================================================================

#[test]
fn test_run_missing_or_empty_group() {
    let mut d = dispatcher(FakeFiles::default());
    let empty = groups("js", Group::new());

    assert_eq!(d.run("js", &empty, None).unwrap(), "");
    assert_eq!(d.run("css", &empty, None).unwrap(), "");
    assert_eq!(d.run("js", &empty, Some("/other")).unwrap(), "");
    assert_eq!(d.base_path(), "/assets");
}

#[test]
fn test_run_renders_in_dependency_order() {
    let group: Group = [
        AssetDefinition::new("app", "js/app.js").with_dependencies(["vue", "jquery"]),
        AssetDefinition::new("vue", "js/vue.js"),
        AssetDefinition::new("analytics", "https://stats.example.com/a.js")
            .with_attributes(Attributes::new().with("async", "")),
    ]
    .into_iter()
    .collect();

    let mut d = dispatcher(FakeFiles::default());
    let html = d.run("script", &groups("script", group), None).unwrap();
    assert_eq!(
        html,
        concat!(
            "<script src=\"/assets/js/vue.js\"></script>\n",
            "<script async src=\"https://stats.example.com/a.js\"></script>\n",
            "<script src=\"/assets/js/app.js\"></script>\n",
        )
    );
}

#[test]
fn test_run_styles() {
    let group: Group = [
        AssetDefinition::new("theme", "css/theme.css").with_dependencies(["reset"]),
        AssetDefinition::new("reset", "css/reset.css")
            .with_attributes(Attributes::from([("media", "screen")])),
    ]
    .into_iter()
    .collect();

    let mut d = dispatcher(FakeFiles::default().with("/assets/css/theme.css", 55));
    d.enable_versioning();
    let html = d.run("style", &groups("style", group), None).unwrap();
    assert_eq!(
        html,
        concat!(
            "<link media=\"screen\" type=\"text/css\" rel=\"stylesheet\" href=\"/assets/css/reset.css\">\n",
            "<link media=\"all\" type=\"text/css\" rel=\"stylesheet\" href=\"css/theme.css?55\">\n",
        )
    );
}

#[test]
fn test_run_prefix_override_persists() {
    let group: Group = [AssetDefinition::new("app", "app.js")].into_iter().collect();
    let all = groups("script", group);
    let recorder = Recorder::default();
    let mut d = Dispatcher::new(&recorder, FakeFiles::default(), DependencyResolver::new(), "/a");

    assert_eq!(d.run("script", &all, Some("/static/")).unwrap(), "script:/static/app.js;");
    assert_eq!(d.base_path(), "/static");
    assert_eq!(d.run("script", &all, None).unwrap(), "script:/static/app.js;");
}

#[test]
fn test_run_cycle_propagates() {
    let group: Group = [
        AssetDefinition::new("x", "x.js").with_dependencies(["y"]),
        AssetDefinition::new("y", "y.js").with_dependencies(["x"]),
    ]
    .into_iter()
    .collect();

    let recorder = Recorder::default();
    let mut d = Dispatcher::new(&recorder, FakeFiles::default(), DependencyResolver::new(), "");
    let err = d.run("script", &groups("script", group), None).unwrap_err();

    assert_eq!(
        err,
        AssetError::CyclicDependency {
            cycle: vec!["x".into(), "y".into(), "x".into()]
        }
    );
    assert!(recorder.0.borrow().is_empty());
}
