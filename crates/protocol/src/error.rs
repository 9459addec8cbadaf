use std::io;

use filters::{ExitCode, HasExitCode};
use thiserror::Error;

use crate::version::ProtocolVersion;

/// Errors raised while exchanging exclude lists with a peer.
///
/// Every variant aborts the session; [`HasExitCode`] gives the status the
/// process should exit with.
#[derive(Debug, Error)]
pub enum ExcludeListError {
    /// An include rule must be sent to a peer that predates include syntax.
    #[error(
        "remote rsync does not support include syntax - aborting (protocol {protocol}, need {})",
        ProtocolVersion::INCLUDE_RULES
    )]
    IncludeUnsupported {
        /// Protocol version negotiated with the peer.
        protocol: ProtocolVersion,
        /// Rule that could not be sent, in wire form.
        rule: String,
    },
    /// A rule is too long for the peer to accept.
    #[error("exclude rule of {length} bytes is too long to send (limit {limit})")]
    RuleTooLong {
        /// Length of the rule in wire form.
        length: usize,
        /// Exclusive upper bound on entry length.
        limit: usize,
    },
    /// The peer announced an entry length outside the accepted range.
    #[error("overflow: exclude list entry of {length} bytes (limit {limit})")]
    Overflow {
        /// Length read from the stream.
        length: i32,
        /// Exclusive upper bound on entry length.
        limit: usize,
    },
    /// Reading or writing the stream failed.
    #[error("exclude list transfer failed: {0}")]
    Io(#[from] io::Error),
}

impl HasExitCode for ExcludeListError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::IncludeUnsupported { .. } => ExitCode::Unsupported,
            Self::RuleTooLong { .. } => ExitCode::Protocol,
            Self::Overflow { .. } => ExitCode::Malloc,
            Self::Io(_) => ExitCode::StreamIo,
        }
    }
}
