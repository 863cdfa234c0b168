//! `check` command.

use anyhow::{Result, bail};
use tola_asset::config::Manifest;
use tola_asset::utils::plural_count;
use tola_asset::{AssetError, DependencyResolver, log};

/// Outcome of arranging one group.
#[derive(Debug)]
pub struct GroupReport<'a> {
    pub group: &'a str,
    pub result: Result<usize, AssetError>,
}

/// Arrange every group in name order.
pub fn check_groups(manifest: &Manifest) -> Vec<GroupReport<'_>> {
    let resolver = DependencyResolver::new();
    manifest
        .group_names()
        .into_iter()
        .map(|group| GroupReport {
            group,
            result: resolver
                .arrange(&manifest.groups[group])
                .map(|order| order.len()),
        })
        .collect()
}

/// Report every group; fails if any group has a cycle.
pub fn check(manifest: &Manifest) -> Result<()> {
    let reports = check_groups(manifest);
    let mut failed = 0;

    for report in &reports {
        match &report.result {
            Ok(count) => {
                log!("check"; "{}: {} ok", report.group, plural_count(*count, "asset"));
            }
            Err(err) => {
                failed += 1;
                log!("error"; "{}: {}", report.group, err);
            }
        }
    }

    if failed > 0 {
        bail!("{} with dependency cycles", plural_count(failed, "group"));
    }
    log!("check"; "{} checked", plural_count(reports.len(), "group"));
    Ok(())
}
