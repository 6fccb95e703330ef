//! Built-in default patterns injected at construction time.
//!
//! The vendor list is an immutable constant: it is copied into each
//! [`crate::IgnoreSet`] when it is built and is never mutated at runtime.

/// Vendor directories excluded by default, in evaluation order.
///
/// Both patterns are anchored to the base directory; a vendored tree nested
/// under an unrelated directory is left alone.
pub const DEFAULT_VENDOR_PATTERNS: [&str; 2] = ["/node_modules/", "/bower_components/"];

/// Synthetic rule excluding any path segment that begins with a dot.
///
/// Unanchored, so it applies at every depth. Its presence is controlled by
/// the `dotfiles` option alone and survives `ignore == false`.
pub const DOTFILE_PATTERN: &str = ".*";

/// Returns the fixed default vendor patterns in evaluation order.
///
/// The sequence is stable and independent of configuration; it is exposed
/// read-only for diagnostics and tests.
///
/// # Examples
///
/// ```
/// let patterns: Vec<_> = ignored_paths::default_patterns().collect();
/// assert_eq!(patterns, ["/node_modules/", "/bower_components/"]);
/// ```
pub fn default_patterns() -> impl Iterator<Item = &'static str> {
    DEFAULT_VENDOR_PATTERNS.into_iter()
}
