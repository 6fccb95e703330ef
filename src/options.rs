use std::path::PathBuf;

/// Configuration gathered at construction time.
///
/// All fields are optional with documented defaults; validation happens when
/// an [`crate::IgnoreSet`] is built, never per query. Setters consume and
/// return the options so configuration reads as a chain.
///
/// # Examples
///
/// ```
/// use ignored_paths::IgnoreOptions;
///
/// let options = IgnoreOptions::new()
///     .dotfiles(true)
///     .ignore_pattern("dist/*")
///     .ignore_pattern("!dist/keep.js");
/// ```
#[derive(Clone, Debug)]
pub struct IgnoreOptions {
    /// Master toggle for default, file-derived, and inline rules. Never
    /// disables the dotfile rule. Defaults to `true`.
    pub(crate) ignore: bool,
    /// Search root for implicit ignore-file discovery. Defaults to the
    /// process working directory.
    pub(crate) cwd: Option<PathBuf>,
    /// Explicit ignore-file location; overrides discovery when set.
    pub(crate) ignore_path: Option<PathBuf>,
    /// Additional inline rules, appended after file-derived rules.
    pub(crate) ignore_patterns: Vec<String>,
    /// When `true`, disables the synthetic dotfile-exclusion rule.
    /// Defaults to `false`.
    pub(crate) dotfiles: bool,
}

impl Default for IgnoreOptions {
    fn default() -> Self {
        Self {
            ignore: true,
            cwd: None,
            ignore_path: None,
            ignore_patterns: Vec::new(),
            dotfiles: false,
        }
    }
}

impl IgnoreOptions {
    /// Creates options with all defaults applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles default, file-derived, and inline rules as a group.
    #[must_use]
    pub const fn ignore(mut self, ignore: bool) -> Self {
        self.ignore = ignore;
        self
    }

    /// Sets the directory searched for the conventional ignore file.
    ///
    /// Discovery looks in this directory only; parents are never walked.
    #[must_use]
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Points at an explicit ignore file, bypassing discovery.
    ///
    /// The file must be readable or construction fails.
    #[must_use]
    pub fn ignore_path(mut self, file: impl Into<PathBuf>) -> Self {
        self.ignore_path = Some(file.into());
        self
    }

    /// Appends one inline pattern, evaluated after file-derived rules.
    #[must_use]
    pub fn ignore_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_patterns.push(pattern.into());
        self
    }

    /// Appends a batch of inline patterns, preserving their order.
    #[must_use]
    pub fn ignore_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// When `true`, drops the synthetic dotfile-exclusion rule.
    #[must_use]
    pub const fn dotfiles(mut self, dotfiles: bool) -> Self {
        self.dotfiles = dotfiles;
        self
    }
}
