//! crates/logging/src/levels.rs
//! Debug flag enum and per-flag level storage.

use std::fmt;

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Filter rule compilation, list maintenance and match reports.
    Filter,
    /// Exclude list exchange with the peer.
    Proto,
}

impl DebugFlag {
    /// All flags in display order.
    pub const ALL: [Self; 2] = [Self::Filter, Self::Proto];

    /// Returns the token used on the command line (`--debug=filter2`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Proto => "proto",
        }
    }

    /// Returns the `tracing` target events for this flag are forwarded to.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Filter => "rsync::filter",
            Self::Proto => "rsync::protocol",
        }
    }

    /// Looks a flag up by its command-line token.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

impl fmt::Display for DebugFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Filter rule processing level.
    pub filter: u8,
    /// Protocol exchange level.
    pub proto: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Filter => self.filter,
            DebugFlag::Proto => self.proto,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Filter => self.filter = level,
            DebugFlag::Proto => self.proto = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.filter = level;
        self.proto = level;
    }
}
