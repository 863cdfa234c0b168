//! A single includable asset.

use serde::{Deserialize, Deserializer, Serialize};

use super::Attributes;

/// One script or stylesheet registered in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDefinition {
    /// Unique within its group.
    pub name: String,
    /// Absolute URL, or a path relative to the dispatcher's base path.
    pub source: String,
    /// Passed through verbatim to the renderer.
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    /// Assets in the same group that must be emitted before this one.
    #[serde(
        default,
        deserialize_with = "deserialize_dependencies",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dependencies: Vec<String>,
}

impl AssetDefinition {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            attributes: Attributes::new(),
            dependencies: Vec::new(),
        }
    }

    /// Replace the dependency list. Repeated names are dropped.
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dedup(dependencies.into_iter().map(Into::into));
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Check whether this asset names `other` as a dependency.
    #[inline]
    pub fn depends_on(&self, other: &str) -> bool {
        self.dependencies.iter().any(|d| d == other)
    }
}

/// Keep the first occurrence of each name.
fn dedup(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

fn deserialize_dependencies<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let raw = Vec::<String>::deserialize(d)?;
    Ok(dedup(raw.into_iter()))
}
