//! Routing configuration sections

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;

/// Upper bound for an explicit worker count
pub const MAX_WORKERS: usize = 1024;

/// Graph construction settings
///
/// `directed` is the only knob the builder reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// When false, every edge also inserts its reverse with the same weight
    pub directed: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { directed: true }
    }
}

/// Per-source parallel solving
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Run per-source Dijkstra on the rayon pool
    pub enabled: bool,

    /// Dedicated pool size; `None` uses the global rayon pool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_workers: Option<usize>,

    /// Graphs with fewer nodes than this are solved sequentially
    pub min_sources_for_parallel: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_workers: None,
            min_sources_for_parallel: 64,
        }
    }
}

impl ParallelConfig {
    /// Sequential solving only
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn num_workers(mut self, workers: usize) -> Self {
        self.num_workers = Some(workers);
        self
    }

    pub fn min_sources_for_parallel(mut self, threshold: usize) -> Self {
        self.min_sources_for_parallel = threshold;
        self
    }
}

impl Validatable for ParallelConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(workers) = self.num_workers {
            if workers == 0 || workers > MAX_WORKERS {
                return Err(ConfigError::range_with_hint(
                    "parallel.num_workers",
                    workers,
                    1,
                    MAX_WORKERS,
                    "Omit the field to use the global rayon pool.",
                ));
            }
        }
        if self.min_sources_for_parallel == 0 {
            return Err(ConfigError::range_with_hint(
                "parallel.min_sources_for_parallel",
                0,
                1,
                usize::MAX,
                "Use 1 to parallelize every graph.",
            ));
        }
        Ok(())
    }
}

/// Routing table export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// JSON key for the route cost
    pub cost_field: String,

    /// Pretty-print the JSON document
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cost_field: "distance_km".to_string(),
            pretty: false,
        }
    }
}

impl ExportConfig {
    pub fn cost_field(mut self, field: impl Into<String>) -> Self {
        self.cost_field = field.into();
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Validatable for ExportConfig {
    fn validate(&self) -> ConfigResult<()> {
        let field = self.cost_field.as_str();
        if field.trim().is_empty() {
            return Err(ConfigError::Custom(
                "export.cost_field must not be empty".to_string(),
            ));
        }
        if field.trim() != field {
            return Err(ConfigError::Custom(format!(
                "export.cost_field {:?} has surrounding whitespace",
                field
            )));
        }
        if field == "path" {
            return Err(ConfigError::Custom(
                "export.cost_field must not shadow the 'path' key".to_string(),
            ));
        }
        Ok(())
    }
}

/// Complete configuration for one routing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingConfig {
    pub graph: GraphConfig,
    pub parallel: ParallelConfig,
    pub export: ExportConfig,
}

impl RoutingConfig {
    pub fn directed(mut self, directed: bool) -> Self {
        self.graph.directed = directed;
        self
    }

    /// Adjust the parallel section in place
    pub fn parallel(mut self, f: impl FnOnce(ParallelConfig) -> ParallelConfig) -> Self {
        self.parallel = f(self.parallel);
        self
    }

    /// Adjust the export section in place
    pub fn export(mut self, f: impl FnOnce(ExportConfig) -> ExportConfig) -> Self {
        self.export = f(self.export);
        self
    }

    pub fn is_directed(&self) -> bool {
        self.graph.directed
    }

    /// Validate every section and return the config unchanged
    pub fn build(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }
}

impl Validatable for RoutingConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.parallel.validate()?;
        self.export.validate()?;
        Ok(())
    }
}
