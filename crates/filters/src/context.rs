use std::env;
use std::ffi::OsStr;
use std::path::Path;

use crate::cvs::{cvs_default_patterns, user_ignore_file};
use crate::decision::is_excluded;
use crate::{FileRequirement, FilterAction, FilterConfig, FilterError, FilterList};

/// Global filter state for one transfer.
///
/// The context owns the global rule list built from command-line options,
/// rule files and the CVS defaults, together with the [`FilterConfig`] that
/// governs how rule files are read. Per-directory lists are owned by the
/// caller and passed to [`is_excluded`](Self::is_excluded) when they apply.
///
/// # Examples
///
/// ```
/// use filters::{FilterAction, FilterContext};
///
/// let mut filters = FilterContext::default();
/// filters.add_exclude_line("*.o + keep.o");
/// filters.add_pattern("/tmp/", FilterAction::Exclude);
///
/// assert!(filters.is_excluded("src/main.o", None, false));
/// assert!(filters.is_excluded("tmp", None, true));
/// assert!(filters.allows("tmp", None, false));
/// assert!(filters.allows(".", None, true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FilterContext {
    global: FilterList,
    config: FilterConfig,
}

impl FilterContext {
    /// Creates an empty context using `config`.
    #[must_use]
    pub const fn new(config: FilterConfig) -> Self {
        Self {
            global: FilterList::new(),
            config,
        }
    }

    /// Returns the loader configuration.
    #[must_use]
    pub const fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Returns the global rule list.
    #[must_use]
    pub const fn global(&self) -> &FilterList {
        &self.global
    }

    /// Returns the global rule list for direct modification.
    pub const fn global_mut(&mut self) -> &mut FilterList {
        &mut self.global
    }

    /// Consumes the context and returns the global rule list.
    #[must_use]
    pub fn into_global(self) -> FilterList {
        self.global
    }

    /// Adds one pattern to the global list (`--exclude`/`--include`).
    ///
    /// The pattern `!` clears the list instead.
    pub fn add_pattern(&mut self, raw: &str, default_action: FilterAction) {
        self.global.push_pattern(raw, default_action);
    }

    /// Adds each whitespace-separated exclude pattern of `line`.
    pub fn add_exclude_line(&mut self, line: &str) {
        self.global.push_tokens(line, FilterAction::Exclude);
    }

    /// Adds each whitespace-separated include pattern of `line`.
    pub fn add_include_line(&mut self, line: &str) {
        self.global.push_tokens(line, FilterAction::Include);
    }

    /// Adds the rule lines of `path` (`--exclude-from`/`--include-from`).
    ///
    /// Returns the number of lines applied.
    ///
    /// # Errors
    ///
    /// See [`FilterList::load_file`].
    pub fn add_file(
        &mut self,
        path: &Path,
        default_action: FilterAction,
        requirement: FileRequirement,
    ) -> Result<usize, FilterError> {
        self.global
            .load_file(path, default_action, requirement, &self.config)
    }

    /// Appends the CVS ignore rules (`--cvs-exclude`).
    ///
    /// The defaults come first, followed by the per-user ignore file in
    /// `$HOME` and the patterns of the ignore environment variable. Both user
    /// sources are optional and use exclude as the default polarity. A
    /// variable that is not valid UTF-8 is decoded lossily, like rule files.
    pub fn add_cvs_excludes(&mut self) {
        let home = env::var_os("HOME");
        let extra = env::var_os(self.config.ignore_env_var());
        let extra = extra.as_deref().map(OsStr::to_string_lossy);
        self.add_cvs_excludes_from(home.as_deref(), extra.as_deref());
    }

    /// Appends the CVS ignore rules using explicit user sources.
    ///
    /// `home` stands in for `$HOME` and `extra` for the ignore environment
    /// variable; `None` skips the source.
    pub fn add_cvs_excludes_from(&mut self, home: Option<&OsStr>, extra: Option<&str>) {
        for pattern in cvs_default_patterns() {
            self.global.push_pattern(pattern, FilterAction::Exclude);
        }

        if let Some(path) = home.and_then(|home| user_ignore_file(home, self.config.ignore_file_name()))
        {
            // Optional sources never fail.
            let _ = self.global.load_file(
                &path,
                FilterAction::Exclude,
                FileRequirement::Optional,
                &self.config,
            );
        }

        if let Some(extra) = extra {
            self.add_exclude_line(extra);
        }
    }

    /// Returns `true` when `name` is excluded by the global list or, failing
    /// a global match, by `local`.
    ///
    /// See [`is_excluded`](crate::is_excluded) for the evaluation rules.
    #[must_use]
    pub fn is_excluded(&self, name: &str, local: Option<&FilterList>, is_dir: bool) -> bool {
        is_excluded(name, &self.global, local, is_dir)
    }

    /// Returns `true` when `name` takes part in the transfer.
    #[must_use]
    pub fn allows(&self, name: &str, local: Option<&FilterList>, is_dir: bool) -> bool {
        !self.is_excluded(name, local, is_dir)
    }

    /// Removes every global rule.
    pub fn clear(&mut self) {
        self.global.clear();
    }
}
