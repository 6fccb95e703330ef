//! Single-directory ignore-file discovery.
//!
//! The conventional ignore file is looked up in exactly one directory, the
//! effective working directory. Parent directories are deliberately never
//! consulted: exclusion rules must not silently inherit from an unrelated
//! ancestor. An explicit `ignore_path` overrides discovery entirely.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::IgnoreOptions;
use crate::{IgnoreError, path};

/// Conventional name of the ignore file looked up in the working directory.
pub const IGNORE_FILE_NAME: &str = ".lintignore";

/// Outcome of ignore-file discovery: the base directory that anchors
/// root-relative patterns plus the surviving pattern lines.
#[derive(Debug)]
pub(crate) struct IgnoreSource {
    /// Forward-slash normalized absolute directory, or the `"."` sentinel
    /// when no ignore file contributes rules.
    pub(crate) base_dir: String,
    /// Pattern lines with comments, blanks, and line-ending noise removed.
    pub(crate) lines: Vec<String>,
}

impl IgnoreSource {
    pub(crate) fn empty() -> Self {
        Self {
            base_dir: ".".to_owned(),
            lines: Vec::new(),
        }
    }
}

/// Locates and reads at most one ignore file according to `options`.
///
/// With `ignore_path` set the file must be readable; failure is fatal. The
/// implicit lookup tolerates an absent file (yielding the `"."` sentinel and
/// no lines) but still fails on a file that exists and cannot be read.
pub(crate) fn discover(options: &IgnoreOptions) -> Result<IgnoreSource, IgnoreError> {
    if let Some(explicit) = &options.ignore_path {
        let file = absolutize(explicit, options);
        let content = read_ignore_file(&file)?;
        return Ok(IgnoreSource {
            base_dir: parent_dir(&file),
            lines: pattern_lines(&content),
        });
    }

    let Some(cwd) = effective_cwd(options) else {
        return Ok(IgnoreSource::empty());
    };
    let candidate = cwd.join(IGNORE_FILE_NAME);
    if !candidate.is_file() {
        return Ok(IgnoreSource::empty());
    }
    let content = read_ignore_file(&candidate)?;
    Ok(IgnoreSource {
        base_dir: path::normalize(&cwd.to_string_lossy()),
        lines: pattern_lines(&content),
    })
}

fn read_ignore_file(file: &Path) -> Result<String, IgnoreError> {
    fs::read_to_string(file).map_err(|source| IgnoreError::FileUnreadable {
        path: file.to_path_buf(),
        source,
    })
}

/// Splits raw file content into pattern lines.
///
/// Blank lines, whitespace-only lines, and lines whose first non-whitespace
/// character is `#` are dropped. CRLF endings are tolerated; the carriage
/// return never reaches pattern compilation.
fn pattern_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(str::to_owned)
        .collect()
}

/// Resolves the working directory used for implicit discovery.
///
/// A relative `cwd` option is resolved against the process working
/// directory; `None` falls back to it outright.
fn effective_cwd(options: &IgnoreOptions) -> Option<PathBuf> {
    match &options.cwd {
        Some(cwd) if cwd.is_absolute() => Some(cwd.clone()),
        Some(cwd) => env::current_dir().ok().map(|dir| dir.join(cwd)),
        None => env::current_dir().ok(),
    }
}

fn absolutize(file: &Path, options: &IgnoreOptions) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }
    match effective_cwd(options) {
        Some(cwd) => cwd.join(file),
        None => file.to_path_buf(),
    }
}

fn parent_dir(file: &Path) -> String {
    match file.parent() {
        Some(parent) if parent.as_os_str().is_empty() => ".".to_owned(),
        Some(parent) => path::normalize(&parent.to_string_lossy()),
        None => ".".to_owned(),
    }
}
