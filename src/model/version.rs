//! The GSF schema version of the file a subrecord came from
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A GSF library version, as written in the file header
///
/// A few layouts gained fields in later versions, so decoders that care are
/// handed the version of the file being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    /// Major version number
    pub major: u8,
    /// Minor version number
    pub minor: u8,
}

impl SchemaVersion {
    /// The newest version whose layouts this crate decodes
    pub const CURRENT: SchemaVersion = SchemaVersion::new(3, 9);

    /// Create a new SchemaVersion
    pub const fn new(major: u8, minor: u8) -> Self {
        SchemaVersion { major, minor }
    }

    /// True if this version is `major.minor` or newer
    pub fn at_least(self, major: u8, minor: u8) -> bool {
        self >= SchemaVersion::new(major, minor)
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        SchemaVersion::CURRENT
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GSF-v{:02}.{:02}", self.major, self.minor)
    }
}

/// A version string that could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid GSF version {0:?}")]
pub struct VersionError(pub String);

impl FromStr for SchemaVersion {
    type Err = VersionError;

    /// Parse either the header form `GSF-v03.09` or a bare `3.9`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VersionError(s.to_string());
        let trimmed = s.trim().trim_end_matches('\0');
        let number = trimmed.strip_prefix("GSF-v").unwrap_or(trimmed);
        let (major, minor) = number.split_once('.').ok_or_else(err)?;
        Ok(SchemaVersion::new(
            major.parse().map_err(|_| err())?,
            minor.parse().map_err(|_| err())?,
        ))
    }
}
