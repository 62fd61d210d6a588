//! Routing configuration
//!
//! One versioned YAML document drives a run:
//!
//! ```yaml
//! version: 1
//! graph:
//!   directed: false
//! parallel:
//!   enabled: true
//!   num_workers: 8
//!   min_sources_for_parallel: 64
//! export:
//!   cost_field: distance_km
//!   pretty: true
//! ```
//!
//! Every section is optional; omitted sections take their defaults.
//!
//! ```rust,ignore
//! use routing_engine::config::RoutingConfig;
//!
//! let config = RoutingConfig::default().directed(false);
//! let config = RoutingConfig::from_yaml("routing.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod routing_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, SUPPORTED_VERSIONS};
pub use routing_config::{ExportConfig, GraphConfig, ParallelConfig, RoutingConfig};
pub use validation::Validatable;
