use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{ExitCode, FilterAction, HasExitCode};

/// Error produced while loading rules from a file or stream.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The rule source could not be opened.
    #[error("failed to open {action} file {}: {source}", path.display())]
    Open {
        /// Rule file that was requested.
        path: PathBuf,
        /// Polarity the file was loaded with, used for the diagnostic.
        action: FilterAction,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Reading from the rule source failed part way through.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Rule file being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A line exceeded the configured maximum length.
    #[error("line {line} of {} exceeds the maximum length of {limit} bytes", path.display())]
    LineTooLong {
        /// Rule file being read.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
        /// Maximum accepted line length (exclusive).
        limit: usize,
    },
}

impl FilterError {
    pub(crate) fn open(path: &Path, action: FilterAction, source: io::Error) -> Self {
        Self::Open {
            path: path.to_path_buf(),
            action,
            source,
        }
    }

    /// Returns the rule source associated with the error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } | Self::LineTooLong { path, .. } => {
                path
            }
        }
    }
}

impl HasExitCode for FilterError {
    fn exit_code(&self) -> ExitCode {
        ExitCode::FileIo
    }
}
