use serde::{Deserialize, Serialize};

use crate::utils::validation::normalize_checksum;

/// Prefix identifying checksums produced by this crate
pub const CHECKSUM_PREFIX: &str = "primaschema:";

/// A checksum string in the form `primaschema:<lowercase hex SHA-256>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Checksum(String);

impl Checksum {
    /// Wrap a lowercase hex digest with the checksum prefix
    #[must_use]
    pub fn from_hex_digest(hex: &str) -> Self {
        Self(format!("{CHECKSUM_PREFIX}{hex}"))
    }

    /// Parse a checksum string, normalizing case and surrounding whitespace.
    /// Returns None if the string is not a valid checksum.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        normalize_checksum(s).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex digest without the prefix
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        self.0.strip_prefix(CHECKSUM_PREFIX).unwrap_or(&self.0)
    }
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Checksum {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid checksum '{s}'"))
    }
}

impl TryFrom<String> for Checksum {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Checksum> for String {
    fn from(checksum: Checksum) -> Self {
        checksum.0
    }
}

/// Target representation for BED conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDirection {
    /// Drop primer sequences (7 columns to 6)
    ToCoordinate,
    /// Backfill primer sequences from the reference (6 columns to 7)
    ToSequence,
}
