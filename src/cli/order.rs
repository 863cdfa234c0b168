//! `order` command.

use anyhow::{Result, bail};
use tola_asset::config::Manifest;
use tola_asset::{DependencyResolver, log};

/// Print the names of `group` in emission order.
pub fn print_order(manifest: &Manifest, group: &str, json: bool) -> Result<()> {
    let names = arranged_names(manifest, group)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

/// Arranged asset names of one group.
pub fn arranged_names<'a>(manifest: &'a Manifest, group: &str) -> Result<Vec<&'a str>> {
    let Some(assets) = manifest.groups.get(group) else {
        log!("error"; "group `{}` not found, available: {}", group, manifest.group_names().join(", "));
        bail!("unknown group `{group}`");
    };

    let order = DependencyResolver::new().arrange(assets)?;
    Ok(order.into_iter().map(|a| a.name.as_str()).collect())
}
