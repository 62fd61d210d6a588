//! Input records
//!
//! Plain, already-parsed node and edge records. Field aliases accept the
//! column names of the logistics network exports (`node_id`, `type`,
//! `distance_km`).

pub mod edge;
pub mod node;

pub use edge::Edge;
pub use node::{Node, NodeAttributes};
