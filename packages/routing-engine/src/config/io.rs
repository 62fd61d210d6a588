//! Configuration I/O (YAML loading)
//!
//! Schema v1. The `version` key is mandatory.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::routing_config::{ExportConfig, GraphConfig, ParallelConfig, RoutingConfig};
use super::validation::Validatable;

/// Schema versions this build can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(default)]
    pub graph: GraphConfig,

    #[serde(default)]
    pub parallel: ParallelConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl From<ConfigFileV1> for RoutingConfig {
    fn from(file: ConfigFileV1) -> Self {
        RoutingConfig {
            graph: file.graph,
            parallel: file.parallel,
            export: file.export,
        }
    }
}

impl From<&RoutingConfig> for ConfigFileV1 {
    fn from(config: &RoutingConfig) -> Self {
        ConfigFileV1 {
            version: 1,
            graph: config.graph.clone(),
            parallel: config.parallel.clone(),
            export: config.export.clone(),
        }
    }
}

impl RoutingConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;

        let version = raw
            .get("version")
            .ok_or(ConfigError::MissingVersion)?
            .as_u64()
            .ok_or_else(|| ConfigError::Custom("'version' must be an integer".to_string()))?;
        let version = u32::try_from(version).map_err(|_| ConfigError::UnsupportedVersion {
            found: u32::MAX,
            supported: SUPPORTED_VERSIONS.to_vec(),
        })?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let file: ConfigFileV1 = serde_yaml::from_value(raw)?;
        RoutingConfig::from(file).build()
    }

    /// Serialize as a v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        self.validate()?;
        Ok(serde_yaml::to_string(&ConfigFileV1::from(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_roundtrip() {
        let config = RoutingConfig::default()
            .directed(false)
            .parallel(|c| c.num_workers(2));

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("directed: false"));
        assert!(yaml.contains("num_workers: 2"));

        let recovered = RoutingConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(recovered, config);
    }

    #[test]
    fn test_sections_are_optional() {
        let config = RoutingConfig::from_yaml_str("version: 1\n").unwrap();
        assert_eq!(config, RoutingConfig::default());
    }

    #[test]
    fn test_missing_version() {
        let result = RoutingConfig::from_yaml_str("graph:\n  directed: true\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_unsupported_version() {
        let result = RoutingConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "version: 1\ngraph:\n  directed: true\n  weighted: true\n";
        let result = RoutingConfig::from_yaml_str(yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_loaded_config_is_validated() {
        let yaml = "version: 1\nparallel:\n  num_workers: 0\n";
        let result = RoutingConfig::from_yaml_str(yaml);
        assert!(matches!(result, Err(ConfigError::Range { .. })));
    }
}
