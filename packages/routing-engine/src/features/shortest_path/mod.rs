//! Shortest Path - All-pairs routing over a built graph
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │ ShortestPathSolver                                    │
//! ├───────────────────────────────────────────────────────┤
//! │  solve_from: one Dijkstra run (binary-heap frontier)  │
//! │  solve_all:  one run per node, rayon across sources   │
//! │              per-worker results merged afterwards     │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! Frontier ties resolve to the lexicographically smaller node id, so two
//! runs over the same graph produce identical tables.

pub mod domain;
pub mod infrastructure;

pub use domain::{RouteEntry, Routes, RoutingTable};
pub use infrastructure::{ShortestPathSolver, SolverConfig};
