//! Single-source Dijkstra over the dense graph indices
//!
//! Every run owns its cost, predecessor and visited arrays plus its
//! frontier; the graph is only read.

use super::frontier::Frontier;
use crate::errors::{Result, RoutingError};
use crate::features::graph_builder::{Graph, NodeIndex};
use crate::features::shortest_path::domain::{RouteEntry, Routes};

/// Shortest-path tree rooted at one source
#[derive(Debug)]
pub(crate) struct ShortestPathTree {
    source: NodeIndex,
    /// `f64::INFINITY` for unreached nodes
    cost: Vec<f64>,
    predecessor: Vec<Option<NodeIndex>>,
    /// Nodes in the order they were settled; the source comes first
    settled: Vec<NodeIndex>,
}

/// Run Dijkstra from `source` until the frontier is empty
///
/// Fails with `CostOverflow` if a tentative cost becomes non-finite;
/// `f64::INFINITY` is reserved for unreached nodes.
pub(crate) fn shortest_path_tree(graph: &Graph, source: NodeIndex) -> Result<ShortestPathTree> {
    let n = graph.node_count();
    let mut cost = vec![f64::INFINITY; n];
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut settled = Vec::new();

    let mut frontier = Frontier::with_capacity(n.min(1024));
    cost[source.index()] = 0.0;
    frontier.push(0.0, source);

    while let Some((current_cost, current)) = frontier.pop() {
        // Stale entry: a cheaper push for this node was already settled
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;
        settled.push(current);

        for &(neighbor, weight) in graph.out_edges(current) {
            if visited[neighbor.index()] {
                continue;
            }
            let candidate = current_cost + weight;
            if !candidate.is_finite() {
                return Err(RoutingError::CostOverflow {
                    source_id: graph.id(source).to_string(),
                    target_id: graph.id(neighbor).to_string(),
                });
            }
            if candidate < cost[neighbor.index()] {
                cost[neighbor.index()] = candidate;
                predecessor[neighbor.index()] = Some(current);
                frontier.push(candidate, neighbor);
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        cost,
        predecessor,
        settled,
    })
}

impl ShortestPathTree {
    pub(crate) fn reached(&self) -> usize {
        self.settled.len()
    }

    pub(crate) fn cost_to(&self, target: NodeIndex) -> Option<f64> {
        let cost = self.cost[target.index()];
        cost.is_finite().then_some(cost)
    }

    /// Walk predecessors back from `target` and reverse
    pub(crate) fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.cost_to(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor[current.index()]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    pub(crate) fn route_to(&self, graph: &Graph, target: NodeIndex) -> Option<RouteEntry> {
        let path = self.path_to(target)?;
        let cost = self.cost[target.index()];
        Some(RouteEntry::new(
            path.into_iter().map(|idx| graph.id(idx).to_string()).collect(),
            cost,
        ))
    }

    /// Routes to every reached node; unreached nodes are absent
    pub(crate) fn into_routes(self, graph: &Graph) -> Routes {
        self.settled
            .iter()
            .filter_map(|&target| {
                self.route_to(graph, target)
                    .map(|entry| (graph.id(target).to_string(), entry))
            })
            .collect()
    }
}
