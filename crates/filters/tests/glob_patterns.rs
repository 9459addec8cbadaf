//! Wildcard behaviour of compiled rules.
//!
//! Single `*`, `?` and bracket classes stay inside one path component while
//! `**` may cross directory boundaries. Rules without a slash match the final
//! component at any depth.

use filters::{FilterRule, MatchMode, wildmatch};

fn excluded(pattern: &str, path: &str) -> bool {
    FilterRule::exclude(pattern).matches(path, false)
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn object_files_are_excluded_at_any_depth() {
    assert!(excluded("*.o", "src/util.o"));
}

#[test]
fn double_star_crosses_directories_but_single_star_does_not() {
    assert!(excluded("**/bar", "x/y/bar"));
    assert!(!FilterRule::exclude("/*/bar").matches("x/y/bar", false));
    assert!(!wildmatch("*/bar", "x/y/bar", MatchMode::Segment));
}

// =============================================================================
// Single Component Wildcards
// =============================================================================

#[test]
fn question_mark_matches_one_byte() {
    assert!(excluded("file?.txt", "file1.txt"));
    assert!(!excluded("file?.txt", "file10.txt"));
    assert!(!excluded("a?b", "dir/a/b"));
}

#[test]
fn bracket_classes() {
    assert!(excluded("[abc].log", "b.log"));
    assert!(!excluded("[abc].log", "d.log"));
    assert!(excluded("[!abc].log", "d.log"));
    assert!(excluded("[^abc].log", "d.log"));
    assert!(excluded("v[0-9]", "v7"));
    assert!(excluded("[[:upper:]]*", "Makefile"));
    assert!(!excluded("[[:upper:]]*", "makefile"));
}

#[test]
fn escaped_metacharacters_are_literal() {
    assert!(excluded(r"\*.txt", "*.txt"));
    assert!(!excluded(r"\*.txt", "a.txt"));
}

#[test]
fn unterminated_bracket_is_literal() {
    assert!(excluded("[abc", "[abc"));
    assert!(!excluded("[abc", "a"));
}

// =============================================================================
// Multi-Component Patterns
// =============================================================================

#[test]
fn inner_slash_matches_trailing_components() {
    assert!(excluded("lib/*.so", "lib/libz.so"));
    assert!(excluded("lib/*.so", "usr/lib/libz.so"));
    assert!(!excluded("lib/*.so", "lib/x/libz.so"));
}

#[test]
fn infix_double_star() {
    assert!(excluded("src/**/test", "src/a/b/test"));
    assert!(excluded("src/**/test", "repo/src/a/test"));
    assert!(!excluded("src/**/test", "src/test"));
}

#[test]
fn trailing_double_star_matches_contents() {
    assert!(excluded("logs/**", "logs/2024/jan.log"));
    assert!(!excluded("logs/**", "logs"));
}

#[test]
fn leading_double_star_matches_root_level() {
    assert!(excluded("**/Cargo.lock", "Cargo.lock"));
    assert!(excluded("**/Cargo.lock", "crates/a/Cargo.lock"));
}

#[test]
fn literal_patterns_match_whole_components() {
    assert!(excluded("core", "a/b/core"));
    assert!(!excluded("core", "a/b/hardcore"));
    assert!(excluded("b/core", "a/b/core"));
    assert!(!excluded("b/core", "a/bb/core"));
}
