//! Dependency map builders

use std::collections::HashMap;

use indexmap::IndexMap;

/// Required versions in manifest order
pub fn manifest_dependencies(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

/// Latest stable versions as a registry would report them
pub fn stable_versions(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}
