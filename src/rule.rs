/// A single parsed ignore rule: pattern text plus its derived matching flags.
///
/// Rules are immutable once created and their relative order inside an
/// [`crate::IgnoreSet`] is significant; later rules override earlier ones.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IgnoreRule {
    pattern: String,
    negated: bool,
    anchored: bool,
    matches_descendants: bool,
}

impl IgnoreRule {
    /// Parses one pattern line into a rule.
    ///
    /// A leading `!` turns the remainder of the line into a negation rule;
    /// everything else becomes a plain exclusion. Comment and blank filtering
    /// happens before this point, so the line is taken verbatim.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        match line.strip_prefix('!') {
            Some(rest) => Self::reinclude(rest),
            None => Self::exclude(line),
        }
    }

    /// Creates a plain exclusion rule for `pattern`.
    #[must_use]
    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self::with_flags(pattern.into(), false)
    }

    /// Creates a negation rule that re-includes paths matching `pattern`.
    #[must_use]
    pub fn reinclude(pattern: impl Into<String>) -> Self {
        Self::with_flags(pattern.into(), true)
    }

    fn with_flags(pattern: String, negated: bool) -> Self {
        let anchored = pattern.starts_with('/');
        let matches_descendants = final_segment(&pattern) != "*";
        Self {
            pattern,
            negated,
            anchored,
            matches_descendants,
        }
    }

    /// Returns the pattern text with any `!` prefix already removed.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns whether a match re-includes the path instead of excluding it.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// Returns whether the pattern is anchored to the base directory root.
    #[must_use]
    pub const fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Returns whether a matching segment also claims everything nested
    /// beneath it.
    ///
    /// False only for patterns whose final segment is a bare `*`, which names
    /// a single segment boundary rather than a subtree.
    #[must_use]
    pub const fn matches_descendants(&self) -> bool {
        self.matches_descendants
    }
}

/// Returns the last path segment of `pattern`, ignoring a trailing slash.
fn final_segment(pattern: &str) -> &str {
    let trimmed = pattern.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
