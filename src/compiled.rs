use globset::{GlobBuilder, GlobMatcher};

use crate::{IgnoreError, IgnoreRule};

/// An [`IgnoreRule`] together with its expanded glob matchers.
///
/// A rule compiles to up to two globs: the pattern itself and, when the rule
/// claims descendants, a `pattern/**` companion covering everything nested
/// beneath a matching segment. Unanchored rules additionally receive a `**/`
/// prefix so they match at any depth.
#[derive(Clone, Debug)]
pub(crate) struct CompiledRule {
    rule: IgnoreRule,
    matchers: Vec<GlobMatcher>,
}

impl CompiledRule {
    /// Compiles `rule` into its matcher list.
    ///
    /// Fails with [`IgnoreError::InvalidPattern`] when the pattern is not a
    /// valid glob. A rule whose pattern is empty after stripping its anchor
    /// (a bare `/` or `!` line) compiles to zero matchers and matches nothing.
    pub(crate) fn new(rule: IgnoreRule) -> Result<Self, IgnoreError> {
        let mut matchers = Vec::with_capacity(2);
        for text in expand(&rule) {
            let glob = GlobBuilder::new(&text)
                .literal_separator(true)
                .build()
                .map_err(|source| IgnoreError::InvalidPattern {
                    pattern: rule.pattern().to_owned(),
                    source,
                })?;
            matchers.push(glob.compile_matcher());
        }
        Ok(Self { rule, matchers })
    }

    /// Returns whether any expanded glob matches the candidate path.
    pub(crate) fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|matcher| matcher.is_match(path))
    }

    /// Returns the source rule.
    pub(crate) const fn rule(&self) -> &IgnoreRule {
        &self.rule
    }
}

/// Expands a rule's pattern into the glob texts to compile.
fn expand(rule: &IgnoreRule) -> Vec<String> {
    let pattern = rule.pattern();
    let core = if rule.is_anchored() {
        pattern.strip_prefix('/').unwrap_or(pattern)
    } else {
        pattern
    };
    // Trailing-slash rules exclude the named segment and its contents alike;
    // the descendant glob below covers the contents.
    let core = core.strip_suffix('/').unwrap_or(core);
    if core.is_empty() {
        return Vec::new();
    }

    let base = if rule.is_anchored() {
        core.to_owned()
    } else {
        format!("**/{core}")
    };
    let mut globs = vec![base.clone()];
    if rule.matches_descendants() {
        globs.push(format!("{base}/**"));
    }
    globs
}
