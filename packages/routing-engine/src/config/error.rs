//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_message() {
        let err = ConfigError::range_with_hint(
            "parallel.num_workers",
            0,
            1,
            1024,
            "Omit the field to use every core.",
        );
        let msg = err.to_string();
        assert!(msg.contains("parallel.num_workers"));
        assert!(msg.contains("0 not in 1..=1024"));
        assert!(msg.ends_with("Omit the field to use every core."));
    }

    #[test]
    fn test_unsupported_version_lists_supported() {
        let err = ConfigError::UnsupportedVersion {
            found: 7,
            supported: vec![1],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported configuration version 7. Supported versions: 1"
        );
    }
}
