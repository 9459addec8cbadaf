//! Include/exclude evaluation across the global and per-directory lists.

use crate::debug_filter::report_match;
use crate::{FilterList, FilterRule};

/// Name that always refers to the transfer root.
pub const ROOT_NAME: &str = ".";

/// Returns the rule that decides `name`, if any.
///
/// The global list is consulted first and the local list second; within a
/// list the first matching rule wins. The root name `.` is never decided by
/// a rule.
#[must_use]
pub fn deciding_rule<'a>(
    name: &str,
    global: &'a FilterList,
    local: Option<&'a FilterList>,
    is_dir: bool,
) -> Option<&'a FilterRule> {
    if name == ROOT_NAME {
        return None;
    }

    global
        .first_match(name, is_dir)
        .or_else(|| local.and_then(|list| list.first_match(name, is_dir)))
}

/// Returns `true` when `name` must be left out of the transfer.
///
/// A matching exclude rule excludes and a matching include rule includes.
/// Names that no rule matches are included. The deciding rule is reported
/// at `filter` debug level 1.
///
/// # Examples
///
/// ```
/// use filters::{FilterAction, FilterList, is_excluded};
///
/// let mut global = FilterList::new();
/// global.push_pattern("*.o", FilterAction::Exclude);
/// let mut local = FilterList::new();
/// local.push_pattern("+ *.c", FilterAction::Exclude);
/// local.push_pattern("*", FilterAction::Exclude);
///
/// assert!(is_excluded("x.o", &global, Some(&local), false));
/// assert!(!is_excluded("x.c", &global, Some(&local), false));
/// assert!(is_excluded("x.h", &global, Some(&local), false));
/// assert!(!is_excluded(".", &global, Some(&local), true));
/// ```
#[must_use]
pub fn is_excluded(
    name: &str,
    global: &FilterList,
    local: Option<&FilterList>,
    is_dir: bool,
) -> bool {
    match deciding_rule(name, global, local, is_dir) {
        Some(rule) => {
            report_match(name, rule, is_dir);
            !rule.is_include()
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use logging::VerbosityConfig;

    use super::*;
    use crate::FilterAction;

    fn list(patterns: &[&str]) -> FilterList {
        let mut list = FilterList::new();
        for pattern in patterns {
            list.push_pattern(pattern, FilterAction::Exclude);
        }
        list
    }

    #[test]
    fn root_is_never_excluded() {
        let global = list(&["*", "."]);
        assert!(!is_excluded(".", &global, None, true));
        assert!(deciding_rule(".", &global, None, true).is_none());
    }

    #[test]
    fn unmatched_names_are_included() {
        assert!(!is_excluded("a", &FilterList::new(), None, false));
        assert!(!is_excluded("a", &list(&["b"]), Some(&list(&["c"])), false));
    }

    #[test]
    fn global_list_takes_precedence_over_local() {
        let global = list(&["+ keep.o"]);
        let local = list(&["*.o"]);
        assert!(!is_excluded("keep.o", &global, Some(&local), false));
        assert!(is_excluded("other.o", &global, Some(&local), false));
    }

    #[test]
    fn first_rule_in_a_list_wins() {
        let global = list(&["*.o", "+ keep.o"]);
        assert!(is_excluded("keep.o", &global, None, false));
    }

    #[test]
    fn match_is_reported_with_original_name() {
        logging::init(VerbosityConfig::from_verbose_level(2));
        logging::drain_events();

        let global = list(&["/tmp/"]);
        assert!(is_excluded("/tmp", &global, None, true));
        let local = list(&["+ *.c"]);
        assert!(!is_excluded("src/a.c", &FilterList::new(), Some(&local), false));

        let messages: Vec<_> = logging::drain_events()
            .into_iter()
            .map(|event| event.message().to_owned())
            .collect();
        assert_eq!(
            messages,
            [
                "excluding directory /tmp because of pattern /tmp/",
                "including file src/a.c because of pattern *.c",
            ]
        );
        logging::init(VerbosityConfig::default());
    }

    #[test]
    fn no_report_without_a_match() {
        logging::init(VerbosityConfig::from_verbose_level(2));
        logging::drain_events();
        assert!(!is_excluded("a", &list(&["b"]), None, false));
        assert!(logging::drain_events().is_empty());
        logging::init(VerbosityConfig::default());
    }
}
