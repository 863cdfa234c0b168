//! Group dispatch: order, resolve URLs, render.
//!
//! ```text
//! run("style", groups, prefix)
//!   └─ groups["style"] ─→ DependencyResolver::arrange ─→ [a, b, c]
//!        └─ for each: source_url(source) ─→ HtmlRenderer::render ─→ concat
//! ```
//!
//! # Concurrency
//!
//! The base path and the versioning flag are instance state changed through
//! `&mut self` and kept across calls. Share one dispatcher between threads
//! only behind a lock.

mod source;

pub use source::{SourceKind, join_base, normalize_base};

use std::path::Path;

use crate::AssetError;
use crate::asset::{AssetDefinition, Groups};
use crate::freshness::FileMetadata;
use crate::render::HtmlRenderer;
use crate::resolver::DependencyResolver;

/// Renders include tags for asset groups.
#[derive(Debug)]
pub struct Dispatcher<R, M> {
    renderer: R,
    files: M,
    resolver: DependencyResolver,
    /// Base path joined to local sources; no trailing slash.
    path: String,
    use_versioning: bool,
}

impl<R: HtmlRenderer, M: FileMetadata> Dispatcher<R, M> {
    /// Create a dispatcher serving local sources from `path`.
    ///
    /// Versioning starts disabled.
    pub fn new(renderer: R, files: M, resolver: DependencyResolver, path: impl AsRef<str>) -> Self {
        Self {
            renderer,
            files,
            resolver,
            path: normalize_base(path.as_ref()),
            use_versioning: false,
        }
    }

    /// Append `?mtime` to local sources from now on.
    pub fn enable_versioning(&mut self) {
        self.use_versioning = true;
    }

    pub fn disable_versioning(&mut self) {
        self.use_versioning = false;
    }

    #[inline]
    pub fn is_versioning(&self) -> bool {
        self.use_versioning
    }

    #[inline]
    pub fn base_path(&self) -> &str {
        &self.path
    }

    /// Replace the base path (trailing slashes stripped).
    pub fn set_base_path(&mut self, prefix: &str) {
        self.path = normalize_base(prefix);
    }

    /// Render every asset of `group` in dependency order.
    ///
    /// A missing or empty group renders as `""` and leaves the base path
    /// untouched. Otherwise `prefix`, if given, replaces the base path for
    /// this and all later calls. The group name doubles as the tag kind.
    pub fn run(
        &mut self,
        group: &str,
        groups: &Groups,
        prefix: Option<&str>,
    ) -> Result<String, AssetError> {
        let Some(assets) = groups.get(group).filter(|g| !g.is_empty()) else {
            crate::debug!("render"; "group `{}` is empty, nothing to render", group);
            return Ok(String::new());
        };

        if let Some(prefix) = prefix {
            self.set_base_path(prefix);
        }

        let ordered = self.resolver.arrange(assets)?;
        let mut html = String::new();
        for asset in ordered {
            html.push_str(&self.asset(group, Some(asset))?);
        }

        crate::debug!("render"; "group `{}`: {} tags", group, assets.len());
        Ok(html)
    }

    /// Render a single asset as `kind`. `None` renders as `""`.
    pub fn asset(&self, kind: &str, asset: Option<&AssetDefinition>) -> Result<String, AssetError> {
        let Some(asset) = asset else {
            return Ok(String::new());
        };

        let source = self.source_url(&asset.source);
        self.renderer.render(kind, &source, &asset.attributes)
    }

    /// Final URL for `source`.
    ///
    /// - remote source: unchanged
    /// - base path is itself a URL: `base/source`, never versioned
    /// - versioning on and the joined file has an mtime: `source?mtime`
    ///   (appended to the original source, not the joined path)
    /// - otherwise: `base/source`
    pub fn source_url(&self, source: &str) -> String {
        if SourceKind::is_remote(source) {
            return source.to_string();
        }

        let file = join_base(&self.path, source);
        if SourceKind::is_remote(&file) {
            return file;
        }

        match self.modified_time(&file) {
            Some(modified) => format!("{source}?{modified}"),
            None => file,
        }
    }

    /// Mtime of the joined local path, when versioning is on.
    fn modified_time(&self, file: &str) -> Option<u64> {
        if !self.use_versioning {
            return None;
        }

        let modified = self.files.last_modified(Path::new(file)).filter(|&t| t != 0);
        if modified.is_none() {
            crate::debug!("render"; "no mtime for `{}`, serving unversioned", file);
        }
        modified
    }
}

#[cfg(test)]
mod tests;
