//! Owner of named containers and the dispatcher that renders them.

use rustc_hash::FxHashMap;

use super::Container;
use crate::AssetError;
use crate::dispatch::Dispatcher;
use crate::freshness::FileMetadata;
use crate::render::HtmlRenderer;

/// Name used by [`Factory::default_container`].
pub const DEFAULT_CONTAINER: &str = "default";

/// Named containers sharing one dispatcher.
///
/// An owned value: create one per site or request and pass it around.
#[derive(Debug)]
pub struct Factory<R, M> {
    dispatcher: Dispatcher<R, M>,
    containers: FxHashMap<String, Container>,
}

impl<R: HtmlRenderer, M: FileMetadata> Factory<R, M> {
    pub fn new(dispatcher: Dispatcher<R, M>) -> Self {
        Self {
            dispatcher,
            containers: FxHashMap::default(),
        }
    }

    /// Get or create the container called `name`.
    pub fn container(&mut self, name: &str) -> &mut Container {
        self.containers
            .entry(name.to_string())
            .or_insert_with(|| Container::new(name))
    }

    pub fn default_container(&mut self) -> &mut Container {
        self.container(DEFAULT_CONTAINER)
    }

    /// Look up a container without creating it.
    pub fn get(&self, name: &str) -> Option<&Container> {
        self.containers.get(name)
    }

    /// Render a container's styles then scripts. Unknown names render `""`.
    pub fn render(&mut self, name: &str) -> Result<String, AssetError> {
        match self.containers.get(name) {
            Some(container) => container.show(&mut self.dispatcher),
            None => Ok(String::new()),
        }
    }

    #[inline]
    pub fn dispatcher(&self) -> &Dispatcher<R, M> {
        &self.dispatcher
    }

    /// Versioning and base path changes go through here.
    #[inline]
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<R, M> {
        &mut self.dispatcher
    }
}
