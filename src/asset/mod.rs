//! Asset data model: definitions, attributes and ordered groups.

mod attrs;
mod definition;
mod group;
mod kind;

pub use attrs::Attributes;
pub use definition::AssetDefinition;
pub use group::{Group, Groups};
pub use kind::AssetKind;
