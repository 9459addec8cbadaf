//! Exit codes for fatal filter and exclude-list failures.
//!
//! The values match the classic rsync `errcode.h` table so a front end can
//! terminate with the status users and scripts already expect.

use std::fmt;

/// Exit codes returned when a filter operation aborts the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Protocol incompatibility (RERR_PROTOCOL = 2).
    Protocol = 2,

    /// Requested action not supported (RERR_UNSUPPORTED = 4).
    ///
    /// Returned when an include rule must be sent to a peer that predates
    /// include syntax.
    Unsupported = 4,

    /// Error in file I/O (RERR_FILEIO = 11).
    ///
    /// Returned when a required rule file cannot be opened or read.
    FileIo = 11,

    /// Error in rsync protocol data stream (RERR_STREAMIO = 12).
    StreamIo = 12,

    /// Error allocating core memory buffers (RERR_MALLOC = 22).
    ///
    /// Also used for buffer overflows detected while decoding peer data.
    Malloc = 22,
}

impl ExitCode {
    /// Returns the numeric process exit status.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns the upstream description printed next to the code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Protocol => "protocol incompatibility",
            Self::Unsupported => "requested action not supported",
            Self::FileIo => "error in file IO",
            Self::StreamIo => "error in rsync protocol data stream",
            Self::Malloc => "error allocating core memory buffers",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.description(), self.as_i32())
    }
}

/// Implemented by error types that carry the exit status of a fatal failure.
pub trait HasExitCode {
    /// Returns the exit code the process should terminate with.
    fn exit_code(&self) -> ExitCode;
}
