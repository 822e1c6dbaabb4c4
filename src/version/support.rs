//! Semantic-version operations the advisor depends on

#[cfg(test)]
use mockall::automock;
use semver::Version;

use crate::version::error::VersionError;
use crate::version::range::RangeSpec;
use crate::version::semver::{VersionPart, parse_version};

/// Version validation, range matching and component extraction
///
/// The advisor only ever talks to this trait, so callers can plug in a
/// different versioning scheme.
#[cfg_attr(test, automock)]
pub trait SemverSupport: Send + Sync {
    /// Whether the string is a single, fully specified version
    fn is_valid_version(&self, version: &str) -> bool;

    /// Whether the string is a range expression (exact versions included)
    fn is_valid_range(&self, range: &str) -> bool;

    /// Whether the version falls inside the range; false if either is invalid
    fn satisfies(&self, version: &str, range: &str) -> bool;

    /// Numeric component of a version, or None if the version is invalid
    fn component(&self, version: &str, part: VersionPart) -> Option<u64>;
}

/// node-semver compatible implementation backed by the `semver` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmSemver;

impl NpmSemver {
    pub fn parse_version(&self, version: &str) -> Result<Version, VersionError> {
        parse_version(version)
    }

    pub fn parse_range(&self, range: &str) -> Result<RangeSpec, VersionError> {
        RangeSpec::parse(range)
    }
}

impl SemverSupport for NpmSemver {
    fn is_valid_version(&self, version: &str) -> bool {
        self.parse_version(version).is_ok()
    }

    fn is_valid_range(&self, range: &str) -> bool {
        self.parse_range(range).is_ok()
    }

    fn satisfies(&self, version: &str, range: &str) -> bool {
        let (Ok(version), Ok(range)) = (self.parse_version(version), self.parse_range(range))
        else {
            return false;
        };
        range.satisfies(&version)
    }

    fn component(&self, version: &str, part: VersionPart) -> Option<u64> {
        self.parse_version(version).ok().map(|v| part.of(&v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", true)]
    #[case("v1.2.3", true)]
    #[case("1.2.3-alpha.1", true)]
    #[case("1.2", false)]
    #[case("^1.2.3", false)]
    #[case("*", false)]
    #[case("git@github.com:x/y", false)]
    fn is_valid_version_returns_expected(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(NpmSemver.is_valid_version(input), expected);
    }

    #[rstest]
    #[case("1.2.3", true)]
    #[case("^1.2.3", true)]
    #[case(">=2.0.0 <3.0.0", true)]
    #[case("1.x || >=3", true)]
    #[case("", true)]
    #[case("latest", false)]
    #[case("git@github.com:x/y", false)]
    #[case("github:user/repo#v1.0.0", false)]
    fn is_valid_range_returns_expected(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(NpmSemver.is_valid_range(input), expected);
    }

    #[rstest]
    #[case("1.2.3", "^1.0.0", true)]
    #[case("2.0.0", "^1.0.0", false)]
    #[case("invalid", "^1.0.0", false)]
    #[case("1.2.3", "not a range", false)]
    fn satisfies_returns_expected(
        #[case] version: &str,
        #[case] range: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(NpmSemver.satisfies(version, range), expected);
    }

    #[rstest]
    #[case("3.4.5", VersionPart::Major, Some(3))]
    #[case("3.4.5", VersionPart::Minor, Some(4))]
    #[case("3.4.5", VersionPart::Patch, Some(5))]
    #[case("3.4", VersionPart::Major, None)]
    fn component_returns_expected(
        #[case] version: &str,
        #[case] part: VersionPart,
        #[case] expected: Option<u64>,
    ) {
        assert_eq!(NpmSemver.component(version, part), expected);
    }
}
