//! In-memory adapters (for testing and embedding)

use parking_lot::RwLock;
use std::sync::Arc;

use crate::errors::Result;
use crate::features::routing::domain::{NetworkDocument, NetworkSource, RoutingTableSink};
use crate::features::shortest_path::RoutingTable;
use crate::shared::models::{Edge, Node};

#[derive(Debug, Clone, Default)]
pub struct InMemoryNetworkSource {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl InMemoryNetworkSource {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

impl From<NetworkDocument> for InMemoryNetworkSource {
    fn from(doc: NetworkDocument) -> Self {
        Self::new(doc.nodes, doc.edges)
    }
}

impl NetworkSource for InMemoryNetworkSource {
    fn load_nodes(&self) -> Result<Vec<Node>> {
        Ok(self.nodes.clone())
    }

    fn load_edges(&self) -> Result<Vec<Edge>> {
        Ok(self.edges.clone())
    }
}

/// Keeps the most recently persisted table
///
/// Clones share storage, so a test can hand one clone to the use case and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoutingTableSink {
    latest: Arc<RwLock<Option<RoutingTable>>>,
    writes: Arc<RwLock<usize>>,
}

impl InMemoryRoutingTableSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<RoutingTable> {
        self.latest.read().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.read()
    }
}

impl RoutingTableSink for InMemoryRoutingTableSink {
    fn persist(&self, table: &RoutingTable) -> Result<()> {
        *self.latest.write() = Some(table.clone());
        *self.writes.write() += 1;
        Ok(())
    }
}
