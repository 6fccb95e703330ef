//! Query-path normalization and relative resolution.
//!
//! These helpers apply to **query** paths only. Pattern text is compiled
//! exactly as written, so a pattern `./foo` never matches a query that
//! normalization reduced from `./foo` to `foo`. That asymmetry is part of the
//! on-disk pattern contract and must not be "fixed" here.

use crate::IgnoreError;

/// Canonicalizes a query path to forward-slash form.
///
/// Every backslash separator becomes `/`, and exactly one leading `./` is
/// stripped. `..` segments are left untouched.
///
/// # Examples
///
/// ```
/// use ignored_paths::normalize;
///
/// assert_eq!(normalize("foo\\bar"), "foo/bar");
/// assert_eq!(normalize("./foo"), "foo");
/// assert_eq!(normalize("././foo"), "./foo");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.strip_prefix("./") {
        Some(stripped) => stripped.to_owned(),
        None => normalized,
    }
}

/// Resolves an absolute path to one relative to `base`.
///
/// Both `path` and (when provided) `base` must be absolute; relative input
/// fails with [`IgnoreError::NotAbsolute`]. When `base` is omitted the result
/// is `path` with its single leading separator stripped.
///
/// The walk removes the common segment prefix and emits a `..` segment for
/// each remaining base component. `..` segments already present in the input
/// are treated as opaque text, never resolved.
///
/// # Examples
///
/// ```
/// use ignored_paths::relative_to;
///
/// assert_eq!(relative_to("/a/b/c", Some("/a")).unwrap(), "b/c");
/// assert_eq!(relative_to("/a/x", Some("/a/b")).unwrap(), "../x");
/// assert_eq!(relative_to("/a/b", None).unwrap(), "a/b");
/// assert!(relative_to("a/b", None).is_err());
/// ```
pub fn relative_to(path: &str, base: Option<&str>) -> Result<String, IgnoreError> {
    if !is_absolute(path) {
        return Err(IgnoreError::NotAbsolute {
            path: path.to_owned(),
        });
    }
    let Some(base) = base else {
        return Ok(path.strip_prefix('/').unwrap_or(path).to_owned());
    };
    if !is_absolute(base) {
        return Err(IgnoreError::NotAbsolute {
            path: base.to_owned(),
        });
    }

    let path_segments: Vec<&str> = segments(path).collect();
    let base_segments: Vec<&str> = segments(base).collect();
    let common = path_segments
        .iter()
        .zip(base_segments.iter())
        .take_while(|(lhs, rhs)| lhs == rhs)
        .count();

    let mut relative: Vec<&str> = Vec::with_capacity(base_segments.len() - common + path_segments.len() - common);
    for _ in common..base_segments.len() {
        relative.push("..");
    }
    relative.extend(&path_segments[common..]);
    Ok(relative.join("/"))
}

/// Returns whether `path` is absolute in either separator style.
///
/// Expects forward-slash normalized text; a leading `/` or an ASCII drive
/// prefix (`c:/`) counts as absolute.
pub(crate) fn is_absolute(path: &str) -> bool {
    if path.starts_with('/') {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
