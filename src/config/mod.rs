//! Configuration module for component data
//!
//! This module loads the component config (bundled with the binary or read
//! from disk) and turns each entry into a `ComponentSpec`.

mod component;
mod options;

pub use component::*;
pub use options::*;

use crate::error::{LevelGenError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Resource identifier of the bundled component config
pub const BUNDLED_RESOURCE: &str = "Configuration/components.json";

const BUNDLED_COMPONENTS: &str = include_str!("../../assets/Configuration/components.json");

/// Where the component config is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// The config compiled into the binary
    #[default]
    Bundled,
    /// A config file on disk
    File(PathBuf),
}

impl ConfigSource {
    /// Name used in diagnostics
    pub fn resource_name(&self) -> String {
        match self {
            ConfigSource::Bundled => BUNDLED_RESOURCE.to_string(),
            ConfigSource::File(path) => path.display().to_string(),
        }
    }
}

/// Component name -> raw config entry.
///
/// Entries stay unparsed until iterated so that one malformed component
/// never prevents the others from loading.
#[derive(Debug, Clone, Default)]
pub struct ComponentsConfig {
    entries: BTreeMap<String, Value>,
}

impl ComponentsConfig {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse every entry, in name order
    pub fn specs(&self) -> impl Iterator<Item = (&str, Result<ComponentSpec>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), ComponentSpec::from_value(name, value)))
    }
}

/// Load the component config from `source`
pub fn load_components(source: &ConfigSource) -> Result<ComponentsConfig> {
    let resource = source.resource_name();
    match source {
        ConfigSource::Bundled => parse_components(&resource, BUNDLED_COMPONENTS),
        ConfigSource::File(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|source| LevelGenError::ConfigUnavailable {
                    resource: resource.clone(),
                    source,
                })?;
            parse_components(&resource, &text)
        }
    }
}

/// Parse config text into a `ComponentsConfig`.
/// Expected format: {"NAME": {"BASE_TIME": "..", "MIN_LEVEL": "..", "MAX_LEVEL": ".."}, ...}
pub fn parse_components(resource: &str, text: &str) -> Result<ComponentsConfig> {
    let entries: BTreeMap<String, Value> =
        serde_json::from_str(text).map_err(|source| LevelGenError::ConfigMalformed {
            resource: resource.to_string(),
            source,
        })?;

    Ok(ComponentsConfig { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_loads() {
        let config = load_components(&ConfigSource::Bundled).unwrap();

        assert!(!config.is_empty());
        for (name, spec) in config.specs() {
            let spec = spec.unwrap_or_else(|e| panic!("bundled entry {name} invalid: {e}"));
            assert!(spec.min_level <= spec.max_level);
            assert!(spec.base_time > 0);
        }
    }

    #[test]
    fn test_specs_keep_malformed_entries_isolated() {
        let config = parse_components(
            "test.json",
            r#"{
                "HULL": { "BASE_TIME": "abc", "MIN_LEVEL": "1", "MAX_LEVEL": "3" },
                "SHIELD": { "BASE_TIME": "90", "MIN_LEVEL": "1", "MAX_LEVEL": "3" }
            }"#,
        )
        .unwrap();

        let results: Vec<_> = config.specs().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "HULL");
        assert!(results[0].1.is_err());
        assert_eq!(results[1].0, "SHIELD");
        assert_eq!(results[1].1.as_ref().unwrap().base_time, 90);
    }

    #[test]
    fn test_non_object_config_is_malformed() {
        let err = parse_components("test.json", "[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LevelGenError::ConfigMalformed { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let source = ConfigSource::File(PathBuf::from("/nonexistent/levelgen/components.json"));
        let err = load_components(&source).unwrap_err();

        assert!(matches!(err, LevelGenError::ConfigUnavailable { .. }));
        assert!(err.to_string().contains("components.json"));
    }

    #[test]
    fn test_empty_object_is_valid() {
        let config = parse_components("test.json", "{}").unwrap();
        assert!(config.is_empty());
        assert_eq!(config.names().count(), 0);
    }
}
