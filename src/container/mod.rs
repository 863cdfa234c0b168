//! Named asset containers.
//!
//! A container collects styles and scripts for one page region (e.g. the
//! `<head>` or the footer) and renders them through a [`Dispatcher`]:
//!
//! ```ignore
//! let mut head = Container::new("head");
//! head.style("reset", "css/reset.css", &[], Attributes::new())
//!     .style("site", "css/site.css", &["reset"], Attributes::new())
//!     .add("app", "js/app.js", &[], Attributes::new().with("defer", ""));
//! let html = head.show(&mut dispatcher)?;
//! ```

mod factory;

pub use factory::{DEFAULT_CONTAINER, Factory};

use crate::AssetError;
use crate::asset::{AssetDefinition, AssetKind, Attributes, Group, Groups};
use crate::dispatch::Dispatcher;
use crate::freshness::FileMetadata;
use crate::render::HtmlRenderer;

/// Styles and scripts registered under one name.
#[derive(Debug, Clone, Default)]
pub struct Container {
    name: String,
    groups: Groups,
    /// Base path override handed to the dispatcher on render.
    prefix: Option<String>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Serve this container's local assets from `path`.
    pub fn prefix(&mut self, path: impl Into<String>) -> &mut Self {
        self.prefix = Some(path.into());
        self
    }

    /// Register an asset, picking `style` for `.css` sources and `script`
    /// for anything else.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
        dependencies: &[&str],
        attributes: Attributes,
    ) -> &mut Self {
        let source = source.into();
        match AssetKind::from_source(&source) {
            AssetKind::Style => self.style(name, source, dependencies, attributes),
            AssetKind::Script => self.script(name, source, dependencies, attributes),
        }
    }

    /// Register a stylesheet. `media="all"` unless the caller set one.
    pub fn style(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
        dependencies: &[&str],
        mut attributes: Attributes,
    ) -> &mut Self {
        attributes.set_default("media", "all");
        self.register(AssetKind::Style, name, source, dependencies, attributes)
    }

    /// Register a script.
    pub fn script(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
        dependencies: &[&str],
        attributes: Attributes,
    ) -> &mut Self {
        self.register(AssetKind::Script, name, source, dependencies, attributes)
    }

    #[inline]
    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    pub fn group(&self, kind: AssetKind) -> Option<&Group> {
        self.groups.get(kind.as_str())
    }

    /// Render the stylesheet group.
    pub fn styles<R: HtmlRenderer, M: FileMetadata>(
        &self,
        dispatcher: &mut Dispatcher<R, M>,
    ) -> Result<String, AssetError> {
        self.render(AssetKind::Style, dispatcher)
    }

    /// Render the script group.
    pub fn scripts<R: HtmlRenderer, M: FileMetadata>(
        &self,
        dispatcher: &mut Dispatcher<R, M>,
    ) -> Result<String, AssetError> {
        self.render(AssetKind::Script, dispatcher)
    }

    /// Styles first, then scripts.
    pub fn show<R: HtmlRenderer, M: FileMetadata>(
        &self,
        dispatcher: &mut Dispatcher<R, M>,
    ) -> Result<String, AssetError> {
        let mut html = self.styles(dispatcher)?;
        html.push_str(&self.scripts(dispatcher)?);
        Ok(html)
    }

    fn render<R: HtmlRenderer, M: FileMetadata>(
        &self,
        kind: AssetKind,
        dispatcher: &mut Dispatcher<R, M>,
    ) -> Result<String, AssetError> {
        dispatcher.run(kind.as_str(), &self.groups, self.prefix.as_deref())
    }

    fn register(
        &mut self,
        kind: AssetKind,
        name: impl Into<String>,
        source: impl Into<String>,
        dependencies: &[&str],
        attributes: Attributes,
    ) -> &mut Self {
        let asset = AssetDefinition::new(name, source)
            .with_dependencies(dependencies.iter().copied())
            .with_attributes(attributes);

        if let Some(old) = self
            .groups
            .entry(kind.as_str().to_string())
            .or_default()
            .insert(asset)
        {
            crate::debug!("container"; "`{}` replaced {} `{}`", self.name, kind, old.name);
        }
        self
    }
}
