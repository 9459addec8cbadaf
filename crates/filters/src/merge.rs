//! Reading rule lines from files and streams.
//!
//! A rule source is a sequence of lines ended by `\n` or `\r` (or by NUL in
//! [`LineTerminator::Nul`](crate::LineTerminator::Nul) mode). Empty lines and
//! lines starting with `;` or `#` are skipped. A final line without a
//! terminator still counts. The path `-` names standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::{FilterAction, FilterConfig, FilterError};

/// Whether a rule source that cannot be read is an error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FileRequirement {
    /// Failing to open or read the source is reported to the caller.
    #[default]
    Required,
    /// An unreadable source contributes no rules and no error.
    Optional,
}

impl FileRequirement {
    /// Returns `true` for [`FileRequirement::Required`].
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Returns `true` when `path` names standard input.
pub(crate) fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads every rule line from `path`.
///
/// Nothing is returned from a source that fails part way through, so a
/// failing source never contributes some of its rules. With
/// [`FileRequirement::Optional`] such failures yield an empty list.
pub(crate) fn read_rule_file(
    path: &Path,
    action: FilterAction,
    requirement: FileRequirement,
    config: &FilterConfig,
) -> Result<Vec<String>, FilterError> {
    let result = if is_stdin(path) {
        let stdin = io::stdin();
        read_rule_lines(&mut stdin.lock(), path, config)
    } else {
        match File::open(path) {
            Ok(file) => read_rule_lines(&mut BufReader::new(file), path, config),
            Err(error) => Err(FilterError::open(path, action, error)),
        }
    };

    match result {
        Err(_) if !requirement.is_required() => Ok(Vec::new()),
        other => other,
    }
}

/// Splits `reader` into rule lines according to `config`.
///
/// `source` only labels errors.
///
/// # Errors
///
/// Returns [`FilterError::Read`] when the reader fails and
/// [`FilterError::LineTooLong`] when a line reaches
/// [`FilterConfig::max_line_len`] bytes.
///
/// # Examples
///
/// ```
/// use filters::{FilterConfig, read_rule_lines};
/// use std::path::Path;
///
/// let mut input: &[u8] = b"*.o\n# comment\n\n+ keep.o\rcore";
/// let lines = read_rule_lines(&mut input, Path::new("rules"), &FilterConfig::default())?;
/// assert_eq!(lines, ["*.o", "+ keep.o", "core"]);
/// # Ok::<(), filters::FilterError>(())
/// ```
pub fn read_rule_lines<R: BufRead + ?Sized>(
    reader: &mut R,
    source: &Path,
    config: &FilterConfig,
) -> Result<Vec<String>, FilterError> {
    let terminator = config.line_terminator();
    let limit = config.max_line_len();

    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut line_number = 1;

    loop {
        let buffer = match reader.fill_buf() {
            Ok(buffer) => buffer,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => {
                return Err(FilterError::Read {
                    path: source.to_path_buf(),
                    source: error,
                });
            }
        };
        if buffer.is_empty() {
            break;
        }

        for &byte in buffer {
            if terminator.is_terminator(byte) {
                finish_line(&mut current, &mut lines);
                line_number += 1;
            } else if current.len() + 1 >= limit {
                return Err(FilterError::LineTooLong {
                    path: source.to_path_buf(),
                    line: line_number,
                    limit,
                });
            } else {
                current.push(byte);
            }
        }

        let consumed = buffer.len();
        reader.consume(consumed);
    }

    finish_line(&mut current, &mut lines);
    Ok(lines)
}

fn finish_line(current: &mut Vec<u8>, lines: &mut Vec<String>) {
    if !current.is_empty() && !matches!(current[0], b';' | b'#') {
        lines.push(String::from_utf8_lossy(current).into_owned());
    }
    current.clear();
}
