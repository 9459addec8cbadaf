use std::fmt;

/// Polarity of a rule: what happens to a path the rule matches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum FilterAction {
    /// Keep the matching path (the rule stops further exclusion).
    Include,
    /// Exclude the matching path.
    #[default]
    Exclude,
}

impl FilterAction {
    /// Textual prefix selecting this polarity in rule files and on the wire.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Include => "+ ",
            Self::Exclude => "- ",
        }
    }

    /// Returns `true` for [`FilterAction::Include`].
    #[must_use]
    pub const fn is_include(self) -> bool {
        matches!(self, Self::Include)
    }

    /// Splits a leading `"+ "` or `"- "` off `text`.
    ///
    /// Only the exact two-character forms count; `"+x"` or `"-\t"` are part of
    /// the pattern.
    #[must_use]
    pub fn strip_prefix(text: &str) -> Option<(Self, &str)> {
        if let Some(rest) = text.strip_prefix("+ ") {
            Some((Self::Include, rest))
        } else {
            text.strip_prefix("- ").map(|rest| (Self::Exclude, rest))
        }
    }
}

impl fmt::Display for FilterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Exclude => f.write_str("exclude"),
        }
    }
}
