use ahash::AHashMap;
use std::sync::Arc;

use crate::shared::models::NodeAttributes;

/// Most nodes one graph can hold; indices are `0..MAX_NODES`
pub const MAX_NODES: usize = u32::MAX as usize;

/// Dense node handle
///
/// Indices follow the lexicographic order of node identifiers, so comparing
/// two indices compares their identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// `index` must be below [`MAX_NODES`]; the builder rejects larger node
    /// sets before any index is created.
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index < MAX_NODES, "node index {} out of range", index);
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Build statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub node_count: usize,
    /// Effective ordered pairs after reverse insertion and collapsing
    pub edge_count: usize,
    /// Input edge records
    pub input_edges: usize,
    /// Identical node records merged into one
    pub deduplicated_nodes: usize,
    /// Ordered-pair insertions that hit an existing pair
    pub collapsed_parallel_edges: usize,
    pub self_loops: usize,
    pub directed: bool,
}

/// Immutable weighted graph of a logistics network
///
/// Adjacency lists are sorted by neighbor index and hold one effective
/// (minimum) weight per ordered pair. Nothing mutates a graph after
/// [`GraphBuilder`](crate::features::graph_builder::GraphBuilder) returns it,
/// so it can be shared freely across solver threads.
#[derive(Debug, Clone)]
pub struct Graph {
    ids: Vec<Arc<str>>,
    attributes: Vec<NodeAttributes>,
    index: AHashMap<Arc<str>, NodeIndex>,
    adjacency: Vec<Vec<(NodeIndex, f64)>>,
    directed: bool,
    stats: GraphStats,
}

impl Graph {
    pub(crate) fn from_parts(
        ids: Vec<Arc<str>>,
        attributes: Vec<NodeAttributes>,
        adjacency: Vec<Vec<(NodeIndex, f64)>>,
        directed: bool,
        stats: GraphStats,
    ) -> Self {
        let index = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (Arc::clone(id), NodeIndex::new(i)))
            .collect();

        Self {
            ids,
            attributes,
            index,
            adjacency,
            directed,
            stats,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Attributes of a node, `None` if the node is unknown
    pub fn attributes(&self, id: &str) -> Option<&NodeAttributes> {
        self.index_of(id).map(|idx| &self.attributes[idx.index()])
    }

    /// Node identifiers in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(|id| id.as_ref())
    }

    /// Outgoing `(neighbor, weight)` pairs, ordered by neighbor id
    pub fn neighbors(&self, id: &str) -> Option<impl Iterator<Item = (&str, f64)> + '_> {
        let idx = self.index_of(id)?;
        Some(
            self.adjacency[idx.index()]
                .iter()
                .map(move |&(next, weight)| (self.id(next), weight)),
        )
    }

    /// Effective weight of the ordered pair, the minimum over parallel edges
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        let from = self.index_of(source)?;
        let to = self.index_of(target)?;
        let edges = &self.adjacency[from.index()];
        edges
            .binary_search_by(|(next, _)| next.cmp(&to))
            .ok()
            .map(|pos| edges[pos].1)
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.stats.edge_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn stats(&self) -> &GraphStats {
        &self.stats
    }

    #[inline]
    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    #[inline]
    pub(crate) fn id(&self, idx: NodeIndex) -> &str {
        &self.ids[idx.index()]
    }

    #[inline]
    pub(crate) fn out_edges(&self, idx: NodeIndex) -> &[(NodeIndex, f64)] {
        &self.adjacency[idx.index()]
    }

    pub(crate) fn indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.ids.len()).map(NodeIndex::new)
    }
}
