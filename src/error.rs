use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error produced while building an [`crate::IgnoreSet`] or answering a query.
///
/// Every variant carries the offending path or pattern so callers can report
/// the failure without re-deriving context. No variant represents a transient
/// fault; nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum IgnoreError {
    /// A configured ignore file exists in the options but could not be read.
    ///
    /// The message is prefixed with the exact phrase `Cannot read ignore
    /// file`, which downstream tooling greps for.
    #[error("Cannot read ignore file: {}: {source}", .path.display())]
    FileUnreadable {
        /// Location of the ignore file that failed to open.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A resolution call required an absolute path but received a relative one.
    ///
    /// Always a caller error, never swallowed.
    #[error("expected an absolute path, got '{path}'")]
    NotAbsolute {
        /// The rejected path text.
        path: String,
    },

    /// A query was issued against a set that was never built from options.
    #[error("ignore rules were never initialised; build the set from options first")]
    NotInitialized,

    /// A pattern line could not be compiled into a glob matcher.
    #[error("failed to compile ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern as written by the user.
        pattern: String,
        /// Compilation error reported by the glob engine.
        #[source]
        source: globset::Error,
    },
}
