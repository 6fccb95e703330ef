//! Tests for the synthetic dotfile-exclusion rule and its gate.
//!
//! The dotfile rule is unanchored, applies at every depth, and is controlled
//! solely by the `dotfiles` option; the `ignore` master toggle never touches
//! it.

use ignored_paths::{IgnoreOptions, IgnoreSet};

fn build(options: IgnoreOptions) -> IgnoreSet {
    let dir = tempfile::tempdir().expect("tempdir");
    IgnoreSet::from_options(&options.cwd(dir.path())).expect("set builds")
}

#[test]
fn dotfiles_are_excluded_by_default() {
    let set = build(IgnoreOptions::new());
    assert!(set.contains(".foo").unwrap());
    assert!(set.contains("foo/.bar").unwrap());
    assert!(set.contains(".config/settings.toml").unwrap());
}

#[test]
fn dot_directory_contents_are_excluded() {
    let set = build(IgnoreOptions::new());
    assert!(set.contains(".git/config").unwrap());
    assert!(set.contains("vendor/.cache/entry").unwrap());
}

#[test]
fn interior_dots_do_not_trigger_the_rule() {
    let set = build(IgnoreOptions::new());
    assert!(!set.contains("foo.bar").unwrap());
    assert!(!set.contains("lib/foo.min.js").unwrap());
}

#[test]
fn ignore_false_does_not_disable_the_dotfile_rule() {
    let set = build(IgnoreOptions::new().ignore(false));
    assert!(set.contains(".foo").unwrap());
    assert!(set.contains("foo/.bar").unwrap());
}

#[test]
fn dotfiles_true_disables_the_rule() {
    let set = build(IgnoreOptions::new().dotfiles(true));
    assert!(!set.contains(".foo").unwrap());
    assert!(!set.contains("foo/.bar").unwrap());
}

#[test]
fn dotfiles_true_is_independent_of_ignore() {
    for ignore in [true, false] {
        let set = build(IgnoreOptions::new().ignore(ignore).dotfiles(true));
        assert!(!set.contains(".foo").unwrap(), "ignore = {ignore}");
        assert!(!set.contains("foo/.bar").unwrap(), "ignore = {ignore}");
    }
}

#[test]
fn explicit_rules_still_apply_when_dotfiles_are_allowed() {
    let set = build(
        IgnoreOptions::new()
            .dotfiles(true)
            .ignore_pattern(".secret"),
    );
    assert!(set.contains(".secret").unwrap());
    assert!(!set.contains(".env").unwrap());
}
