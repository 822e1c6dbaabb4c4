use std::fmt;

use semver::{BuildMetadata, Version};
use serde::Serialize;

use crate::version::error::VersionError;

/// A numeric component of a semantic version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
}

impl VersionPart {
    /// All parts, highest precedence first
    pub const ALL: [VersionPart; 3] = [VersionPart::Major, VersionPart::Minor, VersionPart::Patch];

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionPart::Major => "major",
            VersionPart::Minor => "minor",
            VersionPart::Patch => "patch",
        }
    }

    /// Extract this component from a parsed version
    pub fn of(&self, version: &Version) -> u64 {
        match self {
            VersionPart::Major => version.major,
            VersionPart::Minor => version.minor,
            VersionPart::Patch => version.patch,
        }
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an exact version string into a semver::Version.
///
/// Surrounding whitespace and a single leading `v` are accepted.
/// Partial versions like "1" or "1.2" are rejected; they are only
/// meaningful inside a range. Build metadata is dropped since it never
/// takes part in precedence.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "v1.2.3-beta.1" -> Version(1, 2, 3, pre: beta.1)
/// - "1.2" -> error
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let mut parsed =
        Version::parse(trimmed).map_err(|_| VersionError::InvalidVersion(version.to_string()))?;
    parsed.build = BuildMetadata::EMPTY;
    Ok(parsed)
}
