//! Tests for rule evaluation order.
//!
//! Rules use **first-match-wins** semantics: the global list is scanned in
//! definition order, then the per-directory list, and the first rule that
//! matches decides.
//!
//! Key behaviors verified:
//! - First matching rule determines the outcome
//! - Global rules take precedence over local rules
//! - No rule matching defaults to include
//! - The transfer root `.` is never excluded

use filters::{FilterAction, FilterContext, FilterList, deciding_rule, is_excluded};

fn list(patterns: &[&str]) -> FilterList {
    let mut list = FilterList::new();
    for pattern in patterns {
        list.push_pattern(pattern, FilterAction::Exclude);
    }
    list
}

// =============================================================================
// First-Match-Wins Fundamental Behavior
// =============================================================================

/// Include-before-exclude creates an exception.
#[test]
fn include_then_exclude_everything() {
    let rules = list(&["+ *.keep", "- *"]);

    assert!(!is_excluded("a.keep", &rules, None, false));
    assert!(is_excluded("a.tmp", &rules, None, false));
}

/// An earlier exclude shadows a later, more specific include.
#[test]
fn exclude_then_include_specific() {
    let rules = list(&["*.txt", "+ important.txt"]);

    assert!(is_excluded("important.txt", &rules, None, false));
    assert!(is_excluded("any.txt", &rules, None, false));
}

#[test]
fn later_rules_are_never_consulted_after_a_match() {
    let rules = list(&["+ a*", "a1", "a2"]);
    let rule = deciding_rule("a1", &rules, None, false).unwrap();
    assert_eq!(rule.pattern(), "a*");
}

#[test]
fn unmatched_paths_are_included() {
    let rules = list(&["*.o", "/tmp/"]);
    assert!(!is_excluded("README", &rules, None, false));
    assert!(!is_excluded("src/lib.rs", &rules, None, false));
}

// =============================================================================
// Global vs. Local Lists
// =============================================================================

#[test]
fn global_match_short_circuits_local_list() {
    let global = list(&["*.log"]);
    let local = list(&["+ *"]);

    assert!(is_excluded("debug.log", &global, Some(&local), false));
}

#[test]
fn local_list_decides_when_global_is_silent() {
    let global = list(&["*.log"]);
    let local = list(&["+ *.c", "*"]);

    assert!(!is_excluded("main.c", &global, Some(&local), false));
    assert!(is_excluded("main.h", &global, Some(&local), false));
}

#[test]
fn context_forwards_local_list() {
    let mut filters = FilterContext::default();
    filters.add_pattern("+ keep/", FilterAction::Exclude);
    let local = list(&["*"]);

    assert!(filters.allows("keep", Some(&local), true));
    assert!(!filters.allows("keep", Some(&local), false));
}

// =============================================================================
// Transfer Root
// =============================================================================

#[test]
fn root_is_included_even_by_catch_all_rules() {
    let rules = list(&["*", "**", ".", "/."]);
    assert!(!is_excluded(".", &rules, Some(&rules), true));
    assert!(!is_excluded(".", &rules, None, false));
}

#[test]
fn dot_files_are_ordinary_names() {
    let rules = list(&[".*"]);
    assert!(is_excluded(".hidden", &rules, None, false));
    assert!(is_excluded("dir/.", &rules, None, true));
}
