//! Pluralization for log lines.

/// `"1 group"`, `"3 groups"`, `"0 groups"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
