#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ignored-paths` decides whether a file path should be excluded from
//! static-analysis processing. It implements gitignore-style exclusion
//! semantics layered with tool defaults: an ordered pattern list read from a
//! conventional ignore file ([`IGNORE_FILE_NAME`]) or supplied inline,
//! anchoring via a leading `/`, negation via a leading `!`, two built-in
//! anchored vendor-directory exclusions, and an always-independent dotfile
//! exclusion. The ignore file is discovered in exactly one directory; parent
//! directories are never walked.
//!
//! # Design
//!
//! - [`IgnoreOptions`] gathers construction-time configuration with typed,
//!   defaulted fields. Validation happens when the set is built, not at use.
//! - [`IgnoreRule`] captures one parsed pattern line and its derived flags
//!   (negation, anchoring, descendant matching). The rule itself is
//!   lightweight; heavy lifting happens when an [`IgnoreSet`] is constructed.
//! - [`IgnoreSet`] owns the compiled representation of each rule, expanding
//!   patterns into glob matchers that also cover the contents of matching
//!   directories. Construction performs the single filesystem read, eagerly;
//!   queries are pure computation over immutable state.
//! - Matching operates on `/`-normalized relative path text. Normalization
//!   applies to query paths only, never to pattern text.
//!
//! # Invariants
//!
//! - Rules are evaluated in definition order with last-match-wins semantics:
//!   a later negation re-includes a path excluded earlier. A path matching
//!   no rule is included.
//! - The base directory is either absolute (the directory containing the
//!   ignore file) or the `"."` sentinel, never any other relative path.
//! - The vendor defaults are anchored; the dotfile rule is unanchored and
//!   survives `ignore == false` unless `dotfiles` is set explicitly.
//! - A built set is immutable; changing configuration means building a new
//!   set.
//!
//! # Errors
//!
//! All fallible operations report [`IgnoreError`]: an unreadable configured
//! ignore file, a relative path where an absolute one was required, a query
//! against a never-built set, or a pattern that fails glob compilation. No
//! error is transient and none is retried.
//!
//! # Examples
//!
//! Exclude a build directory while keeping one generated file:
//!
//! ```
//! use ignored_paths::{IgnoreOptions, IgnoreSet};
//!
//! let options = IgnoreOptions::new()
//!     .ignore_pattern("dist/*")
//!     .ignore_pattern("!dist/keep.js");
//! let ignored = IgnoreSet::from_options(&options).expect("rules compile");
//!
//! assert!(ignored.contains("dist/bundle.js").unwrap());
//! assert!(!ignored.contains("dist/keep.js").unwrap());
//! // Dotfiles are excluded by default, independent of other rules.
//! assert!(ignored.contains(".env").unwrap());
//! ```
//!
//! # See also
//!
//! - [`globset`] for the glob matching primitives used internally.

mod compiled;
mod defaults;
mod discover;
mod error;
mod options;
mod path;
mod rule;
mod set;
pub mod trace;

pub use defaults::{DEFAULT_VENDOR_PATTERNS, DOTFILE_PATTERN, default_patterns};
pub use discover::IGNORE_FILE_NAME;
pub use error::IgnoreError;
pub use options::IgnoreOptions;
pub use path::{normalize, relative_to};
pub use rule::IgnoreRule;
pub use set::IgnoreSet;

#[cfg(test)]
mod tests;
