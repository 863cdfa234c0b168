//! Asset kind definitions.

use std::fmt;
use std::str::FromStr;

use crate::AssetError;

/// Tag family an asset renders as. Doubles as the group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// `<script src=..>`
    Script,
    /// `<link rel="stylesheet" href=..>`
    Style,
}

impl AssetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
        }
    }

    /// Guess the kind from a source path: `.css` is a stylesheet,
    /// everything else a script. Query strings and fragments are ignored.
    pub fn from_source(source: &str) -> Self {
        let path = source.split(['?', '#']).next().unwrap_or(source);
        let is_css = path
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("css"));
        if is_css { Self::Style } else { Self::Script }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "script" => Ok(Self::Script),
            "style" | "link" => Ok(Self::Style),
            other => Err(AssetError::UnknownKind(other.to_string())),
        }
    }
}
