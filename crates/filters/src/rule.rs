use std::fmt;

use crate::{FilterAction, probe};

/// A compiled include/exclude rule.
///
/// Compilation strips the polarity prefix and the directory-only trailing
/// slash from the pattern text and records what the matcher needs to know
/// about the remainder. Rules are immutable once built.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FilterRule {
    pub(crate) pattern: String,
    pub(crate) action: FilterAction,
    pub(crate) directory_only: bool,
    pub(crate) wildcard: bool,
    pub(crate) double_star: bool,
    pub(crate) double_star_prefix: bool,
    pub(crate) slash_count: usize,
}

impl FilterRule {
    /// Compiles `raw` into a rule.
    ///
    /// A leading `"+ "` or `"- "` selects the polarity and overrides
    /// `default_action`. A trailing `/` (on text longer than one byte) marks
    /// the rule directory-only and is removed from the stored pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use filters::{FilterAction, FilterRule};
    ///
    /// let rule = FilterRule::compile("+ build/", FilterAction::Exclude);
    /// assert_eq!(rule.action(), FilterAction::Include);
    /// assert_eq!(rule.pattern(), "build");
    /// assert!(rule.is_directory_only());
    /// ```
    #[must_use]
    pub fn compile(raw: &str, default_action: FilterAction) -> Self {
        let (action, text) = FilterAction::strip_prefix(raw).unwrap_or((default_action, raw));

        let wildcard = text.contains(['*', '?', '[']);
        let double_star = wildcard && text.contains("**");
        let double_star_prefix = double_star && text.starts_with("**");
        if double_star {
            probe::check_segment_matching();
        }

        let (pattern, directory_only) = match text.strip_suffix('/') {
            Some(stripped) if text.len() > 1 => (stripped, true),
            _ => (text, false),
        };

        Self {
            pattern: pattern.to_owned(),
            action,
            directory_only,
            wildcard,
            double_star,
            double_star_prefix,
            slash_count: pattern.bytes().filter(|&byte| byte == b'/').count(),
        }
    }

    /// Compiles `raw` with include as the default polarity.
    #[must_use]
    pub fn include(raw: &str) -> Self {
        Self::compile(raw, FilterAction::Include)
    }

    /// Compiles `raw` with exclude as the default polarity.
    #[must_use]
    pub fn exclude(raw: &str) -> Self {
        Self::compile(raw, FilterAction::Exclude)
    }

    /// Returns the normalised pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the rule polarity.
    #[must_use]
    pub const fn action(&self) -> FilterAction {
        self.action
    }

    /// Returns `true` for include rules.
    #[must_use]
    pub const fn is_include(&self) -> bool {
        self.action.is_include()
    }

    /// Returns `true` when the rule only applies to directories.
    #[must_use]
    pub const fn is_directory_only(&self) -> bool {
        self.directory_only
    }

    /// Returns `true` when the pattern contains `*`, `?` or `[`.
    #[must_use]
    pub const fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Returns `true` when the pattern contains `**`.
    #[must_use]
    pub const fn has_double_star(&self) -> bool {
        self.double_star
    }

    /// Returns `true` when the pattern starts with `**`.
    #[must_use]
    pub const fn double_star_is_prefix(&self) -> bool {
        self.double_star_prefix
    }

    /// Number of `/` bytes in the stored pattern, anchor slash included.
    #[must_use]
    pub const fn slash_count(&self) -> usize {
        self.slash_count
    }

    /// Returns `true` when the pattern is anchored at the transfer root.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        self.pattern.starts_with('/')
    }

    /// Pattern text with the directory-only slash restored.
    ///
    /// This is the form used in diagnostics and on the wire.
    #[must_use]
    pub fn display_pattern(&self) -> String {
        let mut text = self.pattern.clone();
        if self.directory_only {
            text.push('/');
        }
        text
    }
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.action.prefix(), self.pattern)?;
        if self.directory_only {
            f.write_str("/")?;
        }
        Ok(())
    }
}
