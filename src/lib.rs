//! Dependency-ordered `<script>` and `<link>` tags for grouped web assets.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── asset/       # AssetDefinition, Attributes, Group
//! ├── resolver/    # DependencyResolver (ordering, cycle detection)
//! ├── dispatch/    # Dispatcher (URL resolution, versioning, rendering)
//! ├── render/      # HtmlRenderer seam + HtmlBuilder
//! ├── freshness/   # FileMetadata seam + filesystem mtime
//! ├── container/   # Container / Factory registration helpers
//! ├── config/      # assets.toml manifest
//! └── logger.rs    # log!/debug! macros
//! ```
//!
//! # Example
//!
//! ```ignore
//! let group: Group = [
//!     AssetDefinition::new("app", "js/app.js").with_dependencies(["vue"]),
//!     AssetDefinition::new("vue", "js/vue.js"),
//! ]
//! .into_iter()
//! .collect();
//! let mut groups = Groups::default();
//! groups.insert("script".into(), group);
//!
//! let mut dispatcher = Dispatcher::new(HtmlBuilder, FsMetadata, DependencyResolver::new(), "/assets");
//! let html = dispatcher.run("script", &groups, None)?;
//! ```

pub mod logger;

pub mod asset;
pub mod config;
pub mod container;
pub mod dispatch;
mod error;
pub mod freshness;
pub mod render;
pub mod resolver;
pub mod utils;

pub use asset::{AssetDefinition, AssetKind, Attributes, Group, Groups};
pub use container::{Container, Factory};
pub use dispatch::{Dispatcher, SourceKind};
pub use error::AssetError;
pub use freshness::{FileMetadata, FsMetadata};
pub use render::{HtmlBuilder, HtmlRenderer};
pub use resolver::DependencyResolver;
