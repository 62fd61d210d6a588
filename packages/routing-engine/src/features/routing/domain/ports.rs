//! Collaborator ports
//!
//! Parsing, credentials and transport live behind these traits. The core
//! only sees parsed records going in and a finished table going out.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::features::shortest_path::RoutingTable;
use crate::shared::models::{Edge, Node};

/// Node and edge records of one network snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Input port: supplies already-parsed records
pub trait NetworkSource: Send + Sync {
    fn load_nodes(&self) -> Result<Vec<Node>>;

    fn load_edges(&self) -> Result<Vec<Edge>>;

    /// Both record sets; adapters backed by one document may override
    fn load_network(&self) -> Result<NetworkDocument> {
        Ok(NetworkDocument {
            nodes: self.load_nodes()?,
            edges: self.load_edges()?,
        })
    }
}

/// Output port: serializes and persists a finished table
pub trait RoutingTableSink: Send + Sync {
    fn persist(&self, table: &RoutingTable) -> Result<()>;
}
