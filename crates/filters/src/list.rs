use std::io::BufRead;
use std::path::Path;
use std::slice;

use crate::debug_filter::{report_list_cleared, report_rule_added};
use crate::merge::{FileRequirement, read_rule_file, read_rule_lines};
use crate::tokens::rule_tokens;
use crate::{FilterAction, FilterConfig, FilterError, FilterRule};

/// Entry that empties a list instead of adding a rule.
pub const CLEAR_TOKEN: &str = "!";

/// Ordered list of compiled rules.
///
/// Rules are evaluated in insertion order and the first match decides. The
/// list owns its rules; appending never reorders existing entries.
///
/// # Examples
///
/// ```
/// use filters::{FilterAction, FilterList};
///
/// let mut list = FilterList::new();
/// list.push_pattern("+ keep.o", FilterAction::Exclude);
/// list.push_pattern("*.o", FilterAction::Exclude);
///
/// let rule = list.first_match("keep.o", false).expect("a rule matches");
/// assert!(rule.is_include());
///
/// list.push_pattern("!", FilterAction::Exclude);
/// assert!(list.is_empty());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterList {
    rules: Vec<FilterRule>,
}

impl FilterList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Compiles `raw` and appends it, or clears the list when `raw` is `!`.
    pub fn push_pattern(&mut self, raw: &str, default_action: FilterAction) {
        if raw == CLEAR_TOKEN {
            report_list_cleared();
            self.rules.clear();
            return;
        }

        self.rules.push(FilterRule::compile(raw, default_action));
        report_rule_added(raw, default_action);
    }

    /// Appends an already compiled rule.
    pub fn push(&mut self, rule: FilterRule) {
        self.rules.push(rule);
    }

    /// Splits `line` on whitespace and adds each token with
    /// [`push_pattern`](Self::push_pattern).
    pub fn push_tokens(&mut self, line: &str, default_action: FilterAction) {
        for token in rule_tokens(line) {
            self.push_pattern(token, default_action);
        }
    }

    /// Adds every rule line read from `reader`.
    ///
    /// Lines are read in full before any rule is added, so a failing reader
    /// leaves the list untouched. `source` only labels errors. Returns the
    /// number of lines applied.
    ///
    /// # Errors
    ///
    /// Propagates the failures of [`read_rule_lines`].
    pub fn load_reader<R: BufRead + ?Sized>(
        &mut self,
        reader: &mut R,
        source: &Path,
        default_action: FilterAction,
        config: &FilterConfig,
    ) -> Result<usize, FilterError> {
        let lines = read_rule_lines(reader, source, config)?;
        Ok(self.apply_lines(&lines, default_action))
    }

    /// Adds every rule line of the file at `path`.
    ///
    /// An empty path is a no-op and `-` reads standard input. With
    /// [`FileRequirement::Optional`] a source that cannot be opened or read
    /// adds nothing and reports success. Returns the number of lines applied.
    ///
    /// # Errors
    ///
    /// With [`FileRequirement::Required`], returns [`FilterError::Open`] when
    /// the file cannot be opened and the errors of [`read_rule_lines`] when
    /// it cannot be read.
    pub fn load_file(
        &mut self,
        path: &Path,
        default_action: FilterAction,
        requirement: FileRequirement,
        config: &FilterConfig,
    ) -> Result<usize, FilterError> {
        if path.as_os_str().is_empty() {
            return Ok(0);
        }
        let lines = read_rule_file(path, default_action, requirement, config)?;
        Ok(self.apply_lines(&lines, default_action))
    }

    fn apply_lines(&mut self, lines: &[String], default_action: FilterAction) -> usize {
        for line in lines {
            self.push_pattern(line, default_action);
        }
        lines.len()
    }

    /// Removes every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when the list holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Iterates over the rules in evaluation order.
    pub fn iter(&self) -> slice::Iter<'_, FilterRule> {
        self.rules.iter()
    }

    /// Returns the first rule matching `name`, if any.
    #[must_use]
    pub fn first_match(&self, name: &str, is_dir: bool) -> Option<&FilterRule> {
        self.rules.iter().find(|rule| rule.matches(name, is_dir))
    }
}

impl<'a> IntoIterator for &'a FilterList {
    type Item = &'a FilterRule;
    type IntoIter = slice::Iter<'a, FilterRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<FilterRule> for FilterList {
    fn from_iter<I: IntoIterator<Item = FilterRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<FilterRule> for FilterList {
    fn extend<I: IntoIterator<Item = FilterRule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
