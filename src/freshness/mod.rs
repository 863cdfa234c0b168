//! Freshness detection: file mtime as a cache-busting version.

pub mod mtime;

pub use mtime::{FileMetadata, FsMetadata, RootedMetadata};
