//! Insertion-ordered asset groups.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::AssetDefinition;

/// Group name → group, e.g. `"style"` and `"script"`.
pub type Groups = FxHashMap<String, Group>;

/// Named assets in the order the caller registered them.
///
/// # Invariants
/// - Names are unique; `index` maps each name to its slot in `assets`
/// - Re-inserting a name replaces the definition but keeps its slot, so the
///   tie-break order seen by the resolver does not move
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<AssetDefinition>", into = "Vec<AssetDefinition>")]
pub struct Group {
    assets: Vec<AssetDefinition>,
    index: FxHashMap<String, usize>,
}

impl Group {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an asset. Returns the replaced definition, if any.
    pub fn insert(&mut self, asset: AssetDefinition) -> Option<AssetDefinition> {
        match self.index.get(&asset.name) {
            Some(&slot) => Some(std::mem::replace(&mut self.assets[slot], asset)),
            None => {
                self.index.insert(asset.name.clone(), self.assets.len());
                self.assets.push(asset);
                None
            }
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, asset: AssetDefinition) -> Self {
        self.insert(asset);
        self
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&AssetDefinition> {
        self.index.get(name).map(|&slot| &self.assets[slot])
    }

    /// Position of `name` in insertion order.
    #[inline]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Assets in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, AssetDefinition> {
        self.assets.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[AssetDefinition] {
        &self.assets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.assets == other.assets
    }
}

impl Eq for Group {}

impl From<Vec<AssetDefinition>> for Group {
    fn from(assets: Vec<AssetDefinition>) -> Self {
        assets.into_iter().collect()
    }
}

impl From<Group> for Vec<AssetDefinition> {
    fn from(group: Group) -> Self {
        group.assets
    }
}

impl FromIterator<AssetDefinition> for Group {
    fn from_iter<I: IntoIterator<Item = AssetDefinition>>(iter: I) -> Self {
        let mut group = Self::new();
        for asset in iter {
            group.insert(asset);
        }
        group
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a AssetDefinition;
    type IntoIter = std::slice::Iter<'a, AssetDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}
