use core::fmt;

/// Protocol version negotiated with the peer.
///
/// Only the capabilities the exclude list exchange depends on are exposed.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProtocolVersion(u8);

impl ProtocolVersion {
    /// First protocol revision that understands `"+ "` include rules.
    pub const INCLUDE_RULES: Self = Self(19);

    /// Newest protocol version spoken by current rsync releases.
    pub const NEWEST: Self = Self(32);

    /// Wraps a raw version number.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value represented by this version.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Reports whether the peer accepts include rules and polarity prefixes
    /// in the exclude list.
    #[must_use]
    #[inline]
    pub const fn supports_include_rules(self) -> bool {
        self.0 >= Self::INCLUDE_RULES.0
    }
}

impl From<u8> for ProtocolVersion {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<ProtocolVersion> for u8 {
    fn from(version: ProtocolVersion) -> Self {
        version.0
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
