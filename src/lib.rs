//! Advisories for outdated, unpinned or unparsable dependency versions

pub mod config;
pub mod version;

pub use config::CheckConfig;
pub use version::advisor::{Advisory, AdvisoryKind, VersionAdvisor, advise};
pub use version::batch::{check_dependencies, check_dependencies_with};
pub use version::error::VersionError;
pub use version::semver::VersionPart;
pub use version::support::{NpmSemver, SemverSupport};
