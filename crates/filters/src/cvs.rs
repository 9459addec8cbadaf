//! Built-in ignore list used by `--cvs-exclude`.
//!
//! The defaults mirror the classic CVS ignore list in its historical order.
//! User patterns from `$HOME/.cvsignore` and the `CVSIGNORE` environment
//! variable are appended after them by
//! [`FilterContext::add_cvs_excludes`](crate::FilterContext::add_cvs_excludes).

use std::ffi::OsStr;
use std::path::PathBuf;

use crate::{FilterRule, MAX_PATH_LEN};

/// Default CVS ignore patterns, in evaluation order.
///
/// The `", *"` entry is kept byte for byte as rsync has always shipped it.
pub const CVS_DEFAULT_PATTERNS: [&str; 29] = [
    "RCS/",
    "SCCS/",
    "CVS/",
    ".svn/",
    "CVS.adm",
    "RCSLOG",
    "cvslog.*",
    "tags",
    "TAGS",
    ".make.state",
    ".nse_depinfo",
    "*~",
    "#*",
    ".#*",
    ", *",
    "*.old",
    "*.bak",
    "*.BAK",
    "*.orig",
    "*.rej",
    ".del-*",
    "*.a",
    "*.o",
    "*.obj",
    "*.so",
    "*.Z",
    "*.elc",
    "*.ln",
    "core",
];

/// Room reserved after `$HOME` for the separator and ignore file name.
const HOME_SUFFIX_RESERVE: usize = 12;

/// Returns an iterator over the default CVS ignore patterns.
pub fn cvs_default_patterns() -> impl ExactSizeIterator<Item = &'static str> {
    CVS_DEFAULT_PATTERNS.into_iter()
}

/// Returns the default CVS ignore patterns compiled as exclude rules.
///
/// # Examples
///
/// ```
/// use filters::cvs_exclusion_rules;
///
/// let rules: Vec<_> = cvs_exclusion_rules().collect();
/// assert_eq!(rules.first().map(|rule| rule.pattern()), Some("RCS"));
/// assert!(rules.iter().all(|rule| !rule.is_include()));
/// ```
pub fn cvs_exclusion_rules() -> impl Iterator<Item = FilterRule> {
    cvs_default_patterns().map(FilterRule::exclude)
}

/// Resolves the per-user ignore file below `home`.
///
/// Returns `None` when `home` is empty or too long to form a usable path.
pub(crate) fn user_ignore_file(home: &OsStr, file_name: &str) -> Option<PathBuf> {
    if home.is_empty() || home.len() >= MAX_PATH_LEN - HOME_SUFFIX_RESERVE {
        return None;
    }
    Some(PathBuf::from(home).join(file_name))
}
