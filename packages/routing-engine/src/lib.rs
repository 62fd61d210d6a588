/*
 * Routing Engine - Logistics network shortest-path routing tables
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Input records (Node, Edge), cancellation
 * - features/    : Vertical slices (graph_builder → shortest_path → routing)
 * - config/      : Versioned YAML configuration
 *
 * Performance:
 * - Dense index adjacency, one effective weight per ordered pair
 * - Binary-heap Dijkstra, one independent run per source
 * - Rayon work-stealing across sources
 */

#![allow(clippy::new_without_default)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

pub use config::{ConfigError, RoutingConfig};
pub use errors::{ErrorKind, Result, RoutingError};
pub use features::graph_builder::{build, Graph, GraphBuilder, GraphStats};
pub use features::routing::{
    NetworkDocument, NetworkSource, RoutingInput, RoutingOutput, RoutingStats, RoutingTableSink,
    RoutingUseCase, RoutingUseCaseImpl,
};
pub use features::shortest_path::{RouteEntry, Routes, RoutingTable, ShortestPathSolver, SolverConfig};
pub use shared::{CancellationToken, Edge, Node, NodeAttributes};
