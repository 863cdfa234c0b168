//! Dependency ordering for asset groups.
//!
//! Pass-based topological sort with deterministic tie-breaking:
//!
//! ```text
//! pass 1: emit every asset with no pending dependency    (insertion order)
//! pass 2: emit every asset whose deps were all emitted in pass 1
//! ...
//! a pass that emits nothing while assets remain → cycle
//! ```
//!
//! Dependency names that are not members of the group are treated as
//! satisfied up front, so callers never have to declare foundation assets.


use rustc_hash::FxHashMap;

use crate::AssetError;
use crate::asset::{AssetDefinition, Group};

/// Orders a group so every asset follows its dependencies.
///
/// Stateless and `Copy`; safe to share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyResolver;

impl DependencyResolver {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Arrange `group` into emission order.
    ///
    /// Every asset appears exactly once. Assets that no dependency forces
    /// apart keep their insertion order. An asset becomes ready only in the
    /// pass after its last dependency was emitted, so `[b(a), a, c]` arranges
    /// to `[a, c, b]` rather than `[a, b, c]`. Fails with
    /// [`AssetError::CyclicDependency`] and no partial result if any asset
    /// (transitively) depends on itself.
    pub fn arrange<'a>(&self, group: &'a Group) -> Result<Vec<&'a AssetDefinition>, AssetError> {
        let assets = group.as_slice();
        let edges = resolvable_edges(group);

        // Pass in which each asset was emitted (1-based).
        let mut emitted: Vec<Option<usize>> = vec![None; assets.len()];
        let mut remaining: Vec<usize> = (0..assets.len()).collect();
        let mut order = Vec::with_capacity(assets.len());
        let mut pass = 0;

        while !remaining.is_empty() {
            pass += 1;
            let before = remaining.len();

            remaining.retain(|&i| {
                // Only deps emitted in an earlier pass count.
                let ready = edges[i]
                    .iter()
                    .all(|&d| emitted[d].is_some_and(|p| p < pass));
                if ready {
                    emitted[i] = Some(pass);
                    order.push(&assets[i]);
                }
                !ready
            });

            if remaining.len() == before {
                let cycle = trace_cycle(assets, &edges, &emitted, remaining[0]);
                crate::debug!("resolve"; "cycle after {} passes: {}", pass, cycle.join(" -> "));
                return Err(AssetError::CyclicDependency { cycle });
            }
        }

        crate::debug!("resolve"; "arranged {} assets in {} passes", order.len(), pass);
        Ok(order)
    }
}

/// Dependency edges as slot indices, dropping names outside the group.
fn resolvable_edges(group: &Group) -> Vec<Vec<usize>> {
    group
        .iter()
        .map(|asset| {
            asset
                .dependencies
                .iter()
                .filter_map(|dep| group.position(dep))
                .collect()
        })
        .collect()
}

/// Walk pending edges from `start` until a slot repeats.
///
/// Every stuck asset has at least one pending dependency, so the walk
/// always closes a loop.
fn trace_cycle(
    assets: &[AssetDefinition],
    edges: &[Vec<usize>],
    emitted: &[Option<usize>],
    start: usize,
) -> Vec<String> {
    let mut path = vec![start];
    let mut seen: FxHashMap<usize, usize> = FxHashMap::default();
    seen.insert(start, 0);

    let mut current = start;
    while let Some(next) = edges[current].iter().copied().find(|&d| emitted[d].is_none()) {
        if let Some(&at) = seen.get(&next) {
            return path[at..]
                .iter()
                .chain(std::iter::once(&next))
                .map(|&i| assets[i].name.clone())
                .collect();
        }
        seen.insert(next, path.len());
        path.push(next);
        current = next;
    }

    path.into_iter().map(|i| assets[i].name.clone()).collect()
}
