use std::sync::Arc;

use crate::compiled::CompiledRule;
use crate::options::IgnoreOptions;
use crate::{IgnoreError, IgnoreRule, defaults, discover, path, trace};

/// Compiled, immutable collection of exclusion rules for fast path queries.
///
/// An `IgnoreSet` is built once from [`IgnoreOptions`] via
/// [`from_options`](Self::from_options). Construction performs the single
/// filesystem read (ignore-file discovery), compiles every rule into glob
/// matchers, and freezes the result; queries never touch the filesystem and
/// never mutate state, so a built set may be shared freely across threads.
///
/// The rule list is ordered and evaluated with last-match-wins semantics:
/// file-derived rules first, inline option rules next, the anchored vendor
/// defaults after those (only while `ignore` is enabled), and the synthetic
/// dotfile rule last (unless `dotfiles` is set).
///
/// `IgnoreSet` is cheaply cloneable (the inner state is behind an [`Arc`]).
/// The [`Default`] value is deliberately *unbuilt*: it models a set whose
/// construction never happened, and every query against it fails with
/// [`IgnoreError::NotInitialized`].
///
/// # Examples
///
/// ```
/// use ignored_paths::{IgnoreOptions, IgnoreSet};
///
/// let options = IgnoreOptions::new()
///     .ignore_pattern("dist/*")
///     .ignore_pattern("!dist/keep.js");
/// let ignored = IgnoreSet::from_options(&options).expect("rules compile");
///
/// assert!(ignored.contains("dist/bundle.js").unwrap());
/// assert!(!ignored.contains("dist/keep.js").unwrap());
/// assert!(!ignored.contains("src/main.js").unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct IgnoreSet {
    inner: Option<Arc<IgnoreSetInner>>,
}

#[derive(Debug)]
struct IgnoreSetInner {
    base_dir: String,
    rules: Vec<CompiledRule>,
}

impl IgnoreSet {
    /// Builds an [`IgnoreSet`] from the supplied options.
    ///
    /// Discovery, file reading, and pattern compilation all happen here,
    /// eagerly. When `ignore` is disabled the filesystem is not touched at
    /// all and only the dotfile rule (if enabled) survives.
    ///
    /// # Errors
    ///
    /// [`IgnoreError::FileUnreadable`] when a configured or discovered
    /// ignore file cannot be read, and [`IgnoreError::InvalidPattern`] when
    /// a pattern line fails glob compilation.
    pub fn from_options(options: &IgnoreOptions) -> Result<Self, IgnoreError> {
        let source = if options.ignore {
            discover::discover(options)?
        } else {
            discover::IgnoreSource::empty()
        };

        let mut rules = Vec::new();
        if options.ignore {
            for line in &source.lines {
                push_rule(&mut rules, IgnoreRule::from_line(line))?;
            }
            for pattern in &options.ignore_patterns {
                push_rule(&mut rules, IgnoreRule::from_line(pattern))?;
            }
            for pattern in defaults::default_patterns() {
                push_rule(&mut rules, IgnoreRule::exclude(pattern))?;
            }
        }
        if !options.dotfiles {
            push_rule(&mut rules, IgnoreRule::exclude(defaults::DOTFILE_PATTERN))?;
        }

        Ok(Self {
            inner: Some(Arc::new(IgnoreSetInner {
                base_dir: source.base_dir,
                rules,
            })),
        })
    }

    /// Returns whether `path` matches an exclusion rule.
    ///
    /// The query path may be relative or absolute and may use either
    /// separator style. Absolute paths are resolved against the base
    /// directory before matching; when the base directory is the `"."`
    /// sentinel the single leading separator is stripped instead. `..`
    /// segments are never resolved, so paths escaping the base directory
    /// generally fall through as included.
    ///
    /// Evaluation is a single linear scan in rule order; every matching rule
    /// updates the verdict, so a later negation overrides an earlier
    /// exclusion. A path matching no rule is included.
    ///
    /// # Errors
    ///
    /// [`IgnoreError::NotInitialized`] when called on a set that was never
    /// built from options (the [`Default`] value).
    pub fn contains(&self, path: &str) -> Result<bool, IgnoreError> {
        let Some(inner) = &self.inner else {
            return Err(IgnoreError::NotInitialized);
        };

        let normalized = path::normalize(path);
        let candidate = if path::is_absolute(&normalized) {
            if inner.base_dir == "." {
                normalized.strip_prefix('/').unwrap_or(&normalized).to_owned()
            } else {
                path::relative_to(&normalized, Some(inner.base_dir.as_str()))?
            }
        } else {
            normalized
        };

        let mut excluded = false;
        for rule in &inner.rules {
            if rule.matches(&candidate) {
                excluded = !rule.rule().is_negated();
            }
        }
        trace::trace_query(path, &candidate, excluded);
        Ok(excluded)
    }

    /// Returns `true` if the set holds no compiled rules.
    ///
    /// An unbuilt set reports empty as well; only [`contains`](Self::contains)
    /// distinguishes the two.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner
            .as_ref()
            .is_none_or(|inner| inner.rules.is_empty())
    }

    /// Returns the base directory anchoring root-relative rules.
    ///
    /// `Some(".")` is the sentinel for "no ignore file contributed rules";
    /// `None` means the set was never built.
    #[must_use]
    pub fn base_dir(&self) -> Option<&str> {
        self.inner.as_deref().map(|inner| inner.base_dir.as_str())
    }

    /// Iterates the compiled rules in evaluation order, for diagnostics.
    pub fn rules(&self) -> impl Iterator<Item = &IgnoreRule> {
        self.inner
            .iter()
            .flat_map(|inner| inner.rules.iter().map(CompiledRule::rule))
    }
}

fn push_rule(rules: &mut Vec<CompiledRule>, rule: IgnoreRule) -> Result<(), IgnoreError> {
    trace::trace_rule_added(rule.pattern(), rule.is_negated(), rule.is_anchored());
    rules.push(CompiledRule::new(rule)?);
    Ok(())
}
