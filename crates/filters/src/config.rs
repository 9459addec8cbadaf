//! Loader configuration shared by every rule source.

/// Maximum path length accepted for rule lines and wire entries.
///
/// A line or entry of this many bytes or more is rejected.
pub const MAX_PATH_LEN: usize = 4096;

/// Per-user ignore file looked up in `$HOME` by default.
pub const DEFAULT_IGNORE_FILE: &str = ".cvsignore";

/// Environment variable holding extra whitespace-separated ignore patterns.
pub const DEFAULT_IGNORE_ENV: &str = "CVSIGNORE";

/// Byte sequence that ends a line in a rule file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineTerminator {
    /// Either `\n` or `\r` ends a line.
    #[default]
    Newline,
    /// A single NUL byte ends a line (`--from0` style input).
    Nul,
}

impl LineTerminator {
    /// Returns `true` when `byte` ends the current line.
    #[must_use]
    pub const fn is_terminator(self, byte: u8) -> bool {
        match self {
            Self::Newline => byte == b'\n' || byte == b'\r',
            Self::Nul => byte == 0,
        }
    }
}

/// Settings that govern how rule sources are read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterConfig {
    line_terminator: LineTerminator,
    max_line_len: usize,
    ignore_file_name: String,
    ignore_env_var: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            line_terminator: LineTerminator::Newline,
            max_line_len: MAX_PATH_LEN,
            ignore_file_name: DEFAULT_IGNORE_FILE.to_owned(),
            ignore_env_var: DEFAULT_IGNORE_ENV.to_owned(),
        }
    }
}

impl FilterConfig {
    /// Selects the line terminator used by rule files.
    #[must_use]
    pub const fn with_line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = terminator;
        self
    }

    /// Overrides the maximum accepted line length.
    #[must_use]
    pub const fn with_max_line_len(mut self, limit: usize) -> Self {
        self.max_line_len = limit;
        self
    }

    /// Overrides the per-user ignore file name resolved against `$HOME`.
    #[must_use]
    pub fn with_ignore_file_name(mut self, name: impl Into<String>) -> Self {
        self.ignore_file_name = name.into();
        self
    }

    /// Overrides the environment variable consulted for extra patterns.
    #[must_use]
    pub fn with_ignore_env_var(mut self, name: impl Into<String>) -> Self {
        self.ignore_env_var = name.into();
        self
    }

    /// Returns the configured line terminator.
    #[must_use]
    pub const fn line_terminator(&self) -> LineTerminator {
        self.line_terminator
    }

    /// Returns the exclusive upper bound on line length.
    #[must_use]
    pub const fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    /// Returns the per-user ignore file name.
    #[must_use]
    pub fn ignore_file_name(&self) -> &str {
        &self.ignore_file_name
    }

    /// Returns the name of the extra-patterns environment variable.
    #[must_use]
    pub fn ignore_env_var(&self) -> &str {
        &self.ignore_env_var
    }
}
