//! Source classification and final URL resolution.

/// Where an asset source points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Full or protocol-relative URL; never prefixed or versioned.
    Remote,
    /// Path served from the dispatcher's base path.
    Local,
}

/// Schemes that form a complete URL without a host.
const HOSTLESS_SCHEMES: [&str; 3] = ["file", "mailto", "news"];

impl SourceKind {
    /// Classify a source string.
    ///
    /// Remote: `https://`, `http://` or `//` prefixed, or any absolute URL
    /// with a host (`ftp://mirror/x.js`). `file:`, `mailto:` and `news:` URLs
    /// are remote without one. Everything else is local, including `c:/..`
    /// style paths which parse as a URL but have no host.
    pub fn classify(source: &str) -> Self {
        if ["https://", "http://", "//"]
            .iter()
            .any(|scheme| source.starts_with(scheme))
        {
            return Self::Remote;
        }

        match url::Url::parse(source) {
            Ok(url) if HOSTLESS_SCHEMES.contains(&url.scheme()) => Self::Remote,
            Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => Self::Remote,
            _ => Self::Local,
        }
    }

    #[inline]
    pub fn is_remote(source: &str) -> bool {
        Self::classify(source) == Self::Remote
    }
}

/// Join a source onto the base path: `base + "/" + source` with the leading
/// slashes of `source` stripped.
pub fn join_base(base: &str, source: &str) -> String {
    format!("{}/{}", base, source.trim_start_matches('/'))
}

/// Strip trailing slashes from a configured prefix.
#[inline]
pub fn normalize_base(prefix: &str) -> String {
    prefix.trim_end_matches('/').to_string()
}
