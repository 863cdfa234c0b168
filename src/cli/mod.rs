//! Command-line interface module.

mod args;
pub mod check;
pub mod order;
pub mod render;

pub use args::{Cli, Commands};

use std::path::Path;

use anyhow::{Result, bail};
use tola_asset::config::{Manifest, find_config_file};
use tola_asset::freshness::RootedMetadata;
use tola_asset::{Dispatcher, HtmlBuilder, log};

/// Dispatcher used by every command: built-in tags, mtimes relative to the
/// manifest directory.
pub type CliDispatcher = Dispatcher<HtmlBuilder, RootedMetadata>;

/// Locate and load the manifest.
pub fn load_manifest(config: &Path) -> Result<Manifest> {
    let Some(path) = find_config_file(config) else {
        log!("error"; "manifest '{}' not found", config.display());
        bail!("no manifest found");
    };
    tola_asset::debug!("config"; "using {}", path.display());
    Manifest::load(&path)
}

/// Dispatcher configured from the manifest's `[dispatch]` section.
pub fn dispatcher(manifest: &Manifest) -> CliDispatcher {
    manifest.dispatcher(HtmlBuilder, RootedMetadata::new(&manifest.root))
}
