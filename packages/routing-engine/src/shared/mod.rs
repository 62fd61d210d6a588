//! Shared building blocks used across features

pub mod cancellation;
pub mod models;

pub use cancellation::CancellationToken;
pub use models::{Edge, Node, NodeAttributes};
