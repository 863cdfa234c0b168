//! Shared helpers.

pub mod html;
mod plural;

pub use plural::plural_count;
