// Graph Builder - node/edge records → immutable Graph
//
// Two phases, nodes before edges, so referential integrity is checked
// against the complete node set before any adjacency is committed.
// Either every record validates and a Graph is returned, or nothing is.

use ahash::AHashMap;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::RoutingConfig;
use crate::errors::{Result, RoutingError};
use crate::features::graph_builder::domain::{Graph, GraphStats, NodeIndex, MAX_NODES};
use crate::shared::models::{Edge, Node, NodeAttributes};

/// Build a graph from already-parsed records
pub fn build(nodes: &[Node], edges: &[Edge], directed: bool) -> Result<Graph> {
    GraphBuilder::new(directed).build(nodes, edges)
}

/// Graph builder
///
/// Holds only the `directed` flag; every input arrives as a parameter.
///
/// ## Usage
/// ```text
/// let graph = GraphBuilder::new(false).build(&nodes, &edges)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    directed: bool,
}

impl GraphBuilder {
    pub fn new(directed: bool) -> Self {
        Self { directed }
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(config.is_directed())
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Build the graph
    ///
    /// ## Errors
    /// - `DuplicateNode` when two records share an id with different attributes
    /// - `DanglingEdge` when an edge endpoint is not a known node
    /// - `NegativeWeight` / `InvalidWeight` for weights below zero, NaN or +∞
    pub fn build(&self, nodes: &[Node], edges: &[Edge]) -> Result<Graph> {
        info!(
            "Building logistics network graph: {} node records, {} edge records (directed={})",
            nodes.len(),
            edges.len(),
            self.directed
        );

        let mut stats = GraphStats {
            input_edges: edges.len(),
            directed: self.directed,
            ..GraphStats::default()
        };

        // Phase 1: node set, ordered by id
        let node_set = Self::collect_nodes(nodes, &mut stats)?;
        Self::check_node_count(node_set.len())?;
        let ids: Vec<Arc<str>> = node_set.keys().map(|id| Arc::from(*id)).collect();
        let attributes: Vec<NodeAttributes> = node_set.into_values().cloned().collect();
        let index: AHashMap<&str, NodeIndex> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_ref(), NodeIndex::new(i)))
            .collect();

        // Phase 2: edges, one effective weight per ordered pair
        let mut pending: Vec<AHashMap<NodeIndex, f64>> = vec![AHashMap::new(); ids.len()];
        for edge in edges {
            let (from, to) = Self::validate_edge(edge, &index)?;
            if edge.is_self_loop() {
                stats.self_loops += 1;
            }

            Self::insert_min(&mut pending[from.index()], to, edge.weight, &mut stats);
            if !self.directed && from != to {
                Self::insert_min(&mut pending[to.index()], from, edge.weight, &mut stats);
            }
        }

        let adjacency: Vec<Vec<(NodeIndex, f64)>> = pending
            .into_iter()
            .map(|targets| {
                let mut out: Vec<(NodeIndex, f64)> = targets.into_iter().collect();
                out.sort_unstable_by_key(|(next, _)| *next);
                out
            })
            .collect();

        stats.node_count = ids.len();
        stats.edge_count = adjacency.iter().map(Vec::len).sum();

        debug!(
            "Graph built: {} nodes, {} effective edges, {} duplicate nodes merged, {} parallel edges collapsed, {} self-loops",
            stats.node_count,
            stats.edge_count,
            stats.deduplicated_nodes,
            stats.collapsed_parallel_edges,
            stats.self_loops
        );

        Ok(Graph::from_parts(
            ids,
            attributes,
            adjacency,
            self.directed,
            stats,
        ))
    }

    fn collect_nodes<'a>(
        nodes: &'a [Node],
        stats: &mut GraphStats,
    ) -> Result<BTreeMap<&'a str, &'a NodeAttributes>> {
        let mut set: BTreeMap<&str, &NodeAttributes> = BTreeMap::new();

        for node in nodes {
            match set.entry(node.id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(&node.attributes);
                }
                Entry::Occupied(existing) => {
                    if *existing.get() != &node.attributes {
                        return Err(RoutingError::DuplicateNode {
                            id: node.id.clone(),
                            existing: existing.get().to_string(),
                            conflicting: node.attributes.to_string(),
                        });
                    }
                    stats.deduplicated_nodes += 1;
                }
            }
        }

        Ok(set)
    }

    fn check_node_count(nodes: usize) -> Result<()> {
        if nodes > MAX_NODES {
            return Err(RoutingError::GraphTooLarge {
                nodes,
                max: MAX_NODES,
            });
        }
        Ok(())
    }

    fn validate_edge(edge: &Edge, index: &AHashMap<&str, NodeIndex>) -> Result<(NodeIndex, NodeIndex)> {
        let from = index
            .get(edge.source.as_str())
            .copied()
            .ok_or_else(|| RoutingError::dangling_edge(&edge.source, &edge.target, &edge.source))?;
        let to = index
            .get(edge.target.as_str())
            .copied()
            .ok_or_else(|| RoutingError::dangling_edge(&edge.source, &edge.target, &edge.target))?;

        if edge.weight.is_nan() || edge.weight == f64::INFINITY {
            return Err(RoutingError::InvalidWeight {
                source_id: edge.source.clone(),
                target_id: edge.target.clone(),
                weight: edge.weight,
            });
        }
        if edge.weight < 0.0 {
            return Err(RoutingError::NegativeWeight {
                source_id: edge.source.clone(),
                target_id: edge.target.clone(),
                weight: edge.weight,
            });
        }

        Ok((from, to))
    }

    #[inline]
    fn insert_min(
        targets: &mut AHashMap<NodeIndex, f64>,
        to: NodeIndex,
        weight: f64,
        stats: &mut GraphStats,
    ) {
        targets
            .entry(to)
            .and_modify(|current| {
                stats.collapsed_parallel_edges += 1;
                if weight < *current {
                    *current = weight;
                }
            })
            .or_insert(weight);
    }
}

impl Default for GraphBuilder {
    /// Directed, matching the default configuration
    fn default() -> Self {
        Self::new(true)
    }
}
