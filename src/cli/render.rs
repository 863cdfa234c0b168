//! `render` command.

use std::io::{Write, stdout};

use anyhow::{Context, Result};
use tola_asset::config::Manifest;
use tola_asset::{AssetKind, debug};

use super::dispatcher;

/// Print the tags of `group`, or styles then scripts when no group is given.
pub fn render(
    manifest: &Manifest,
    group: Option<&str>,
    prefix: Option<&str>,
    versioning: Option<bool>,
) -> Result<()> {
    let html = render_to_string(manifest, group, prefix, versioning)?;
    let mut out = stdout().lock();
    out.write_all(html.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn render_to_string(
    manifest: &Manifest,
    group: Option<&str>,
    prefix: Option<&str>,
    versioning: Option<bool>,
) -> Result<String> {
    let mut dispatcher = dispatcher(manifest);
    match versioning {
        Some(true) => dispatcher.enable_versioning(),
        Some(false) => dispatcher.disable_versioning(),
        None => {}
    }

    let groups: Vec<&str> = match group {
        Some(group) => vec![group],
        None => vec![AssetKind::Style.as_str(), AssetKind::Script.as_str()],
    };

    let mut html = String::new();
    for name in groups {
        let tags = dispatcher
            .run(name, &manifest.groups, prefix)
            .with_context(|| format!("failed to render group `{name}`"))?;
        debug!("render"; "`{}`: {} bytes", name, tags.len());
        html.push_str(&tags);
    }
    Ok(html)
}
