//! Asset ordering and rendering errors.

use thiserror::Error;

/// Errors raised while arranging or rendering a group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// Assets in a group depend on each other in a loop.
    ///
    /// `cycle` walks the loop and repeats its first name at the end,
    /// e.g. `["a", "b", "a"]`. A self-dependency is `["a", "a"]`.
    #[error("circular dependency: {}", .cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },

    /// The renderer has no tag for this kind.
    #[error("unknown asset kind `{0}` (expected `script`, `style` or `link`)")]
    UnknownKind(String),
}

impl AssetError {
    /// Asset names involved in the failure, without the closing repeat.
    pub fn assets(&self) -> &[String] {
        match self {
            Self::CyclicDependency { cycle, .. } => &cycle[..cycle.len().saturating_sub(1)],
            Self::UnknownKind(_) => &[],
        }
    }
}
