use serde::Deserialize;

/// Settings for checking a set of dependencies
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    /// Require every dependency to be an exact version
    pub must_be_pinned: bool,
    /// Dependency names that are never checked
    pub ignore: Vec<String>,
}

impl CheckConfig {
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn check_config_from_empty_object_uses_defaults() {
        let result = serde_json::from_value::<CheckConfig>(json!({})).unwrap();

        assert_eq!(result, CheckConfig::default());
        assert!(!result.must_be_pinned);
        assert!(result.ignore.is_empty());
    }

    #[test]
    fn check_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<CheckConfig>(json!({
            "mustBePinned": true,
            "ignore": ["left-pad", "lodash"]
        }))
        .unwrap();

        assert_eq!(
            result,
            CheckConfig {
                must_be_pinned: true,
                ignore: vec!["left-pad".to_string(), "lodash".to_string()],
            }
        );
    }

    #[test]
    fn is_ignored_matches_exact_names_only() {
        let config = CheckConfig {
            ignore: vec!["@types/node".to_string()],
            ..Default::default()
        };

        assert!(config.is_ignored("@types/node"));
        assert!(!config.is_ignored("@types/node-fetch"));
    }
}
