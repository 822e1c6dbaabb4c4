//! Advisory generation for a single dependency

use serde::Serialize;
use tracing::{debug, trace};

use crate::version::semver::VersionPart;
use crate::version::support::{NpmSemver, SemverSupport};

/// Human-readable notice about a dependency's required version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    /// Component with a newer stable release, if that is what triggered the advisory
    pub part: Option<VersionPart>,
    pub message: String,
}

/// What triggered an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    /// A newer release exists for this component of a pinned version
    Outdated(VersionPart),
    /// A range was given where an exact version is required
    NotPinned,
    /// The stable version falls outside the required range
    OutOfRange,
    /// The required version is neither a version nor a range
    Unparsable,
    /// The stable version is not a valid version
    UnparsableStable,
}

impl Advisory {
    pub fn outdated(name: &str, stable: &str, part: VersionPart) -> Self {
        Self {
            part: Some(part),
            message: format!("New {part} version available for module \"{name}\" ({stable})"),
        }
    }

    pub fn not_pinned(name: &str) -> Self {
        Self {
            part: None,
            message: format!("Version for module \"{name}\" is not pinned"),
        }
    }

    pub fn out_of_range(name: &str, range: &str) -> Self {
        Self {
            part: None,
            message: format!("Latest version for module \"{name}\" is out of range \"{range}\""),
        }
    }

    pub fn unparsable(name: &str, required: &str) -> Self {
        Self {
            part: None,
            message: format!("Unparsable semver string for module \"{name}\": \"{required}\""),
        }
    }

    pub fn unparsable_stable(name: &str, stable: &str) -> Self {
        Self {
            part: None,
            message: format!("Unparsable stable version for module \"{name}\": \"{stable}\""),
        }
    }

    /// Classify this advisory from its part and message
    ///
    /// Returns None for a hand-built advisory whose message matches none of the
    /// messages produced by the constructors above.
    pub fn kind(&self) -> Option<AdvisoryKind> {
        if let Some(part) = self.part {
            return Some(AdvisoryKind::Outdated(part));
        }

        let message = self.message.as_str();
        let kind = if message.starts_with("Version for module ")
            && message.ends_with(" is not pinned")
        {
            AdvisoryKind::NotPinned
        } else if message.starts_with("Latest version for module ") {
            AdvisoryKind::OutOfRange
        } else if message.starts_with("Unparsable semver string for module ") {
            AdvisoryKind::Unparsable
        } else if message.starts_with("Unparsable stable version for module ") {
            AdvisoryKind::UnparsableStable
        } else {
            return None;
        };
        Some(kind)
    }
}

/// Compares required version specifiers against the latest stable release
#[derive(Debug, Clone, Default)]
pub struct VersionAdvisor<S = NpmSemver> {
    semver: S,
}

impl<S: SemverSupport> VersionAdvisor<S> {
    pub fn new(semver: S) -> Self {
        Self { semver }
    }

    /// Check whether `required` needs attention given the `stable` release.
    ///
    /// Exact versions are compared component by component, major first.
    /// Ranges are checked for pinning and then for satisfaction. Anything
    /// else yields an "unparsable" advisory. Returns None when nothing needs
    /// to be reported.
    pub fn advise(
        &self,
        name: &str,
        stable: &str,
        required: &str,
        must_be_pinned: bool,
    ) -> Option<Advisory> {
        if !self.semver.is_valid_version(required) {
            if self.semver.is_valid_range(required) {
                return self.check_range(name, stable, required, must_be_pinned);
            }

            debug!("Unparsable version for {}: {:?}", name, required);
            return Some(Advisory::unparsable(name, required));
        }

        if !self.semver.is_valid_version(stable) {
            debug!("Unparsable stable version for {}: {:?}", name, stable);
            return Some(Advisory::unparsable_stable(name, stable));
        }

        let advisory = self
            .newer_part(stable, required)
            .map(|part| Advisory::outdated(name, stable, part));
        trace!("Checked {} {} against {}: {:?}", name, required, stable, advisory);
        advisory
    }

    /// Check a range specifier against the stable release
    ///
    /// Pinning is checked first, so the range is never evaluated when an exact
    /// version is required.
    pub fn check_range(
        &self,
        name: &str,
        stable: &str,
        range: &str,
        must_be_pinned: bool,
    ) -> Option<Advisory> {
        if must_be_pinned {
            return Some(Advisory::not_pinned(name));
        }

        if !self.semver.is_valid_version(stable) {
            debug!("Unparsable stable version for {}: {:?}", name, stable);
            return Some(Advisory::unparsable_stable(name, stable));
        }

        if self.semver.satisfies(stable, range) {
            None
        } else {
            Some(Advisory::out_of_range(name, range))
        }
    }

    /// First component, in precedence order, where stable is greater than required
    ///
    /// Components are compared independently: a lower stable major does not
    /// stop a higher stable patch from being reported.
    fn newer_part(&self, stable: &str, required: &str) -> Option<VersionPart> {
        VersionPart::ALL.into_iter().find(|&part| {
            match (
                self.semver.component(stable, part),
                self.semver.component(required, part),
            ) {
                (Some(stable), Some(required)) => stable > required,
                _ => false,
            }
        })
    }
}

/// Check a dependency using npm version semantics
///
/// ```
/// use dep_advisor::advise;
///
/// let advisory = advise("foo", "2.0.0", "1.5.0", false).unwrap();
/// assert_eq!(advisory.message, "New major version available for module \"foo\" (2.0.0)");
/// assert!(advise("foo", "1.2.3", "^1.0.0", false).is_none());
/// ```
pub fn advise(name: &str, stable: &str, required: &str, must_be_pinned: bool) -> Option<Advisory> {
    VersionAdvisor::new(NpmSemver).advise(name, stable, required, must_be_pinned)
}
