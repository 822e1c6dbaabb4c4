//! Checking every dependency of a manifest at once

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::CheckConfig;
use crate::version::advisor::{Advisory, VersionAdvisor};
use crate::version::support::{NpmSemver, SemverSupport};

/// Advise on each dependency, keeping manifest order
///
/// `required` maps dependency names to the specifiers found in the manifest,
/// `stable` maps names to their latest stable release. Dependencies without
/// a known stable release and those listed in `config.ignore` are skipped.
/// Only dependencies that produced an advisory appear in the result.
pub fn check_dependencies_with<S: SemverSupport>(
    advisor: &VersionAdvisor<S>,
    required: &IndexMap<String, String>,
    stable: &HashMap<String, String>,
    config: &CheckConfig,
) -> IndexMap<String, Advisory> {
    required
        .iter()
        .filter(|(name, _)| !config.is_ignored(name))
        .filter_map(|(name, required_version)| {
            let Some(stable_version) = stable.get(name) else {
                debug!("No stable version known for {}, skipping", name);
                return None;
            };

            advisor
                .advise(name, stable_version, required_version, config.must_be_pinned)
                .map(|advisory| (name.clone(), advisory))
        })
        .collect()
}

/// [`check_dependencies_with`] using npm version semantics
pub fn check_dependencies(
    required: &IndexMap<String, String>,
    stable: &HashMap<String, String>,
    config: &CheckConfig,
) -> IndexMap<String, Advisory> {
    check_dependencies_with(&VersionAdvisor::new(NpmSemver), required, stable, config)
}
