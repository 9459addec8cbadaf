use crate::ProtocolVersion;

/// Session facts that shape the exclude list sent to the peer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionOptions {
    /// Protocol version negotiated with the peer.
    pub protocol: ProtocolVersion,
    /// Only list files instead of transferring them (`--list-only`).
    pub list_only: bool,
    /// Descend into directories (`--recursive`).
    pub recursive: bool,
}

impl SessionOptions {
    /// Creates options for a recursive transfer at `protocol`.
    #[must_use]
    pub const fn new(protocol: ProtocolVersion) -> Self {
        Self {
            protocol,
            list_only: false,
            recursive: true,
        }
    }

    /// Sets the list-only flag.
    #[must_use]
    pub const fn with_list_only(mut self, list_only: bool) -> Self {
        self.list_only = list_only;
        self
    }

    /// Sets the recursion flag.
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Returns `true` when a listing must stop one level below the root.
    #[must_use]
    pub const fn limits_listing_depth(&self) -> bool {
        self.list_only && !self.recursive
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new(ProtocolVersion::NEWEST)
    }
}
