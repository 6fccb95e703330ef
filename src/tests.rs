use super::*;

fn build(options: IgnoreOptions) -> IgnoreSet {
    let dir = tempfile::tempdir().expect("tempdir");
    IgnoreSet::from_options(&options.cwd(dir.path())).expect("set builds")
}

#[test]
fn later_negation_overrides_earlier_exclusion() {
    let set = build(IgnoreOptions::new().ignore_patterns(["dir/*", "!dir/foo.js"]));
    assert!(set.contains("dir/bar.js").unwrap());
    assert!(!set.contains("dir/foo.js").unwrap());
}

#[test]
fn later_exclusion_overrides_earlier_negation() {
    let set = build(IgnoreOptions::new().ignore_patterns(["!dir/foo.js", "dir/*"]));
    assert!(set.contains("dir/foo.js").unwrap());
}

#[test]
fn pattern_query_asymmetry_is_preserved() {
    // Normalization applies to queries only: pattern "./x" stays literal.
    let dotted = build(IgnoreOptions::new().ignore_pattern("./x"));
    assert!(!dotted.contains("x").unwrap());

    let plain = build(IgnoreOptions::new().ignore_pattern("x"));
    assert!(plain.contains("./x").unwrap());
}

#[test]
fn vendor_defaults_apply_out_of_the_box() {
    let set = build(IgnoreOptions::new());
    assert!(set.contains("node_modules/pkg/index.js").unwrap());
    assert!(set.contains("bower_components/lib/lib.js").unwrap());
    assert!(!set.contains("vendor/other/file.js").unwrap());
}

#[test]
fn vendor_defaults_are_root_relative() {
    let set = build(IgnoreOptions::new());
    assert!(!set.contains("packages/app/node_modules/x.js").unwrap());
}

#[test]
fn ignore_false_keeps_only_the_dotfile_rule() {
    let set = build(
        IgnoreOptions::new()
            .ignore(false)
            .ignore_pattern("src/*"),
    );
    assert!(!set.contains("src/app.js").unwrap());
    assert!(!set.contains("node_modules/pkg.js").unwrap());
    assert!(set.contains(".foo").unwrap());
    assert!(set.contains("foo/.bar").unwrap());
}

#[test]
fn dotfiles_true_drops_the_dotfile_rule_regardless_of_ignore() {
    for ignore in [true, false] {
        let set = build(IgnoreOptions::new().ignore(ignore).dotfiles(true));
        assert!(!set.contains(".foo").unwrap());
        assert!(!set.contains("foo/.bar").unwrap());
    }
}

#[test]
fn parent_segments_fall_through_anchored_defaults() {
    let set = build(IgnoreOptions::new().dotfiles(true));
    assert!(!set.contains("../node_modules/pkg.js").unwrap());
    assert!(!set.contains("a/../node_modules/pkg.js").unwrap());
}

#[test]
fn backslash_queries_match_like_forward_slash() {
    let set = build(IgnoreOptions::new().ignore_pattern("dist/*"));
    assert!(set.contains("dist\\bundle.js").unwrap());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for characters that always form valid glob patterns.
    fn pattern_char() -> impl Strategy<Value = char> {
        prop_oneof![
            Just('a'),
            Just('b'),
            Just('c'),
            Just('0'),
            Just('1'),
            Just('_'),
            Just('-'),
            Just('.'),
            Just('/'),
            Just('*'),
        ]
    }

    fn valid_pattern() -> impl Strategy<Value = String> {
        proptest::collection::vec(pattern_char(), 1..20)
            .prop_map(|chars| chars.into_iter().collect::<String>())
            // Adjacent stars outside a bare `**` segment are rejected by the
            // glob engine; the determinism property only needs compilable
            // patterns.
            .prop_filter("recursive star runs do not compile", |pattern: &String| {
                !pattern.contains("**")
            })
    }

    /// Literal segment names: no wildcards, no separators, no leading dot.
    fn segment_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,8}"
    }

    proptest! {
        #[test]
        fn contains_is_deterministic(pattern in valid_pattern(), query in valid_pattern()) {
            let set = build(IgnoreOptions::new().ignore_pattern(&pattern));
            let first = set.contains(&query).unwrap();
            let second = set.contains(&query).unwrap();
            prop_assert_eq!(first, second);

            let clone = set.clone();
            prop_assert_eq!(first, clone.contains(&query).unwrap());
        }

        #[test]
        fn last_match_wins_for_equal_patterns(name in segment_name()) {
            let reincluded = build(
                IgnoreOptions::new().ignore_patterns([name.clone(), format!("!{name}")]),
            );
            prop_assert!(!reincluded.contains(&name).unwrap());

            let excluded = build(
                IgnoreOptions::new().ignore_patterns([format!("!{name}"), name.clone()]),
            );
            prop_assert!(excluded.contains(&name).unwrap());
        }

        #[test]
        fn normalization_removes_backslashes(raw in "[a-z\\\\./]{1,20}") {
            let normalized = normalize(&raw);
            prop_assert!(!normalized.contains('\\'));
        }

        #[test]
        fn rule_parsing_round_trips_flags(name in segment_name(), negated in any::<bool>()) {
            let line = if negated { format!("!{name}") } else { name.clone() };
            let rule = IgnoreRule::from_line(&line);
            prop_assert_eq!(rule.is_negated(), negated);
            prop_assert_eq!(rule.pattern(), name.as_str());
            prop_assert!(!rule.is_anchored());
        }
    }
}
