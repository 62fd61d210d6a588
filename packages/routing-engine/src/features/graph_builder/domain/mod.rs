//! Graph domain model

mod graph;

pub use graph::{Graph, GraphStats, NodeIndex, MAX_NODES};
