//! Matching of a single compiled rule against a candidate path.
//!
//! Candidate names are relative to the transfer root, use `/` as the
//! separator and may carry one leading `/`. The steps below run in a fixed
//! order; each narrowing of the candidate only applies to the step that
//! introduces it and what follows.

use crate::FilterRule;
use crate::wildmatch::{MatchMode, wildmatch};

impl FilterRule {
    /// Returns `true` when this rule matches `name`.
    ///
    /// `is_dir` reports whether the candidate is a directory; directory-only
    /// rules never match anything else. An empty name (or one whose final
    /// component is empty) never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use filters::FilterRule;
    ///
    /// let rule = FilterRule::exclude("*.o");
    /// assert!(rule.matches("src/util.o", false));
    ///
    /// let rule = FilterRule::exclude("/tmp/");
    /// assert!(rule.matches("tmp", true));
    /// assert!(!rule.matches("tmp", false));
    /// assert!(!rule.matches("a/tmp", true));
    /// ```
    #[must_use]
    pub fn matches(&self, name: &str, is_dir: bool) -> bool {
        let mut name = name;

        // Rules without a slash or "**" name a file anywhere in the tree, so
        // only the final component takes part.
        if self.slash_count == 0 && !self.double_star {
            if let Some(pos) = name.rfind('/') {
                name = &name[pos + 1..];
            }
        }

        if name.is_empty() {
            return false;
        }

        if self.directory_only && !is_dir {
            return false;
        }

        let mut pattern = self.pattern.as_str();
        let anchored = match pattern.strip_prefix('/') {
            Some(rest) => {
                pattern = rest;
                name = name.strip_prefix('/').unwrap_or(name);
                true
            }
            None => false,
        };

        if self.wildcard {
            self.matches_wildcard(pattern, name, anchored)
        } else if anchored {
            name == pattern
        } else {
            matches_trailing_segments(pattern, name)
        }
    }

    fn matches_wildcard(&self, pattern: &str, name: &str, anchored: bool) -> bool {
        let mode = if self.double_star {
            MatchMode::Whole
        } else {
            MatchMode::Segment
        };

        // An unanchored pattern with inner slashes covers exactly the last
        // slash_count + 1 components of the name.
        let candidate = if !anchored && self.slash_count > 0 && !self.double_star {
            last_components(name, self.slash_count + 1)
        } else {
            name
        };

        if wildmatch(pattern, candidate, mode) {
            return true;
        }

        if self.double_star_prefix {
            // "**/rest" may also match "rest" at the root with nothing before it.
            pattern.as_bytes().get(2) == Some(&b'/') && wildmatch(&pattern[3..], name, mode)
        } else if !anchored && self.double_star {
            // An infix or trailing "**" may start at any directory boundary.
            name.match_indices('/')
                .any(|(pos, _)| wildmatch(pattern, &name[pos + 1..], mode))
        } else {
            false
        }
    }
}

/// Returns the final `count` components of `name`, or all of it when it has
/// fewer.
fn last_components(name: &str, count: usize) -> &str {
    name.rmatch_indices('/')
        .nth(count - 1)
        .map_or(name, |(pos, _)| &name[pos + 1..])
}

/// Literal match of whole trailing components: `pattern` must be a suffix of
/// `name` that starts at the beginning or right after a `/`.
fn matches_trailing_segments(pattern: &str, name: &str) -> bool {
    name.strip_suffix(pattern)
        .is_some_and(|head| head.is_empty() || head.ends_with('/'))
}
