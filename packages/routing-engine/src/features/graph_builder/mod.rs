//! Graph Builder - Logistics network construction
//!
//! Turns node and edge records into an immutable weighted [`Graph`]:
//! - Node set validated first (conflicting redefinitions rejected,
//!   identical duplicates merged)
//! - Edges validated against the node set and for weight sanity
//! - Undirected networks get the reverse of every edge
//! - Parallel edges collapse to their minimum weight at build time

pub mod domain;
pub mod infrastructure;

pub use domain::{Graph, GraphStats, NodeIndex, MAX_NODES};
pub use infrastructure::{build, GraphBuilder};
