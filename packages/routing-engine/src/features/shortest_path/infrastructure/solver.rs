//! All-pairs shortest path solver
//!
//! Runs one independent Dijkstra per source. Sources are spread over the
//! rayon pool when the graph is large enough; every worker returns its own
//! `(source, routes)` pair and the table is assembled after the parallel
//! section, so no map is shared between threads.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

use super::dijkstra::shortest_path_tree;
use crate::config::{ParallelConfig, RoutingConfig};
use crate::errors::{Result, RoutingError};
use crate::features::graph_builder::{Graph, NodeIndex};
use crate::features::shortest_path::domain::{RouteEntry, Routes, RoutingTable};
use crate::shared::CancellationToken;

/// Solver settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Solve sources on the rayon pool
    pub parallel: bool,

    /// Dedicated pool size; `None` uses the global pool
    pub num_workers: Option<usize>,

    /// Graphs with fewer nodes are solved sequentially
    pub min_sources_for_parallel: usize,
}

impl SolverConfig {
    pub fn sequential() -> Self {
        Self::from(&ParallelConfig::sequential())
    }

    /// Threads a parallel run uses: the dedicated pool size, or one per core
    pub fn effective_workers(&self) -> usize {
        self.num_workers.unwrap_or_else(num_cpus::get)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::from(&ParallelConfig::default())
    }
}

impl From<&ParallelConfig> for SolverConfig {
    fn from(config: &ParallelConfig) -> Self {
        Self {
            parallel: config.enabled,
            num_workers: config.num_workers,
            min_sources_for_parallel: config.min_sources_for_parallel.max(1),
        }
    }
}

/// Shortest path solver
///
/// # Example
/// ```ignore
/// let solver = ShortestPathSolver::new(SolverConfig::default());
/// let table = solver.solve_all(&graph)?;
/// let cost = table.cost("WH-1", "REGION-7");
/// ```
pub struct ShortestPathSolver {
    config: SolverConfig,
    pool: Option<ThreadPool>,
}

impl ShortestPathSolver {
    pub fn new(config: SolverConfig) -> Self {
        let pool = match (config.parallel, config.num_workers) {
            (true, Some(workers)) => Self::build_pool(workers),
            _ => None,
        };
        Self { config, pool }
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(SolverConfig::from(&config.parallel))
    }

    pub fn sequential() -> Self {
        Self::new(SolverConfig::sequential())
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn build_pool(workers: usize) -> Option<ThreadPool> {
        match ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("routing-worker-{}", i))
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!(
                    "Failed to build {}-worker pool, using the global rayon pool: {}",
                    workers, e
                );
                None
            }
        }
    }

    /// Routes from one source to every node it reaches
    ///
    /// The source itself is always present with path `[source]` and cost 0.
    pub fn solve_from(&self, graph: &Graph, source: &str) -> Result<Routes> {
        let idx = graph
            .index_of(source)
            .ok_or_else(|| RoutingError::unknown_node(source))?;
        Ok(shortest_path_tree(graph, idx)?.into_routes(graph))
    }

    /// Least-cost route between two nodes, `None` if unreachable
    pub fn shortest_route(
        &self,
        graph: &Graph,
        source: &str,
        target: &str,
    ) -> Result<Option<RouteEntry>> {
        let from = graph
            .index_of(source)
            .ok_or_else(|| RoutingError::unknown_node(source))?;
        let to = graph
            .index_of(target)
            .ok_or_else(|| RoutingError::unknown_node(target))?;
        Ok(shortest_path_tree(graph, from)?.route_to(graph, to))
    }

    /// Complete routing table for every source in the graph
    pub fn solve_all(&self, graph: &Graph) -> Result<RoutingTable> {
        self.solve_all_with_cancel(graph, &CancellationToken::new())
    }

    /// Complete routing table, checking `cancel` before each source
    ///
    /// A cancelled run returns `Cancelled`, never a partial table.
    pub fn solve_all_with_cancel(
        &self,
        graph: &Graph,
        cancel: &CancellationToken,
    ) -> Result<RoutingTable> {
        self.solve_all_observed(graph, cancel, &|_| {})
    }

    /// `on_solved` receives the running count after each finished source
    pub(crate) fn solve_all_observed(
        &self,
        graph: &Graph,
        cancel: &CancellationToken,
        on_solved: &(dyn Fn(usize) + Sync),
    ) -> Result<RoutingTable> {
        let total = graph.node_count();
        let parallel = self.config.parallel && total >= self.config.min_sources_for_parallel;
        if parallel {
            info!(
                "Computing shortest paths using Dijkstra's algorithm: {} sources on {} workers",
                total,
                self.config.effective_workers()
            );
        } else {
            info!(
                "Computing shortest paths using Dijkstra's algorithm: {} sources (sequential)",
                total
            );
        }

        let completed = AtomicUsize::new(0);
        let solve_one = |source: NodeIndex| -> Result<(String, Routes)> {
            if cancel.is_cancelled() {
                return Err(RoutingError::Cancelled {
                    completed: completed.load(Ordering::Relaxed),
                    total,
                });
            }
            let tree = shortest_path_tree(graph, source)?;
            debug!(
                "Solved source {}: {} reachable nodes",
                graph.id(source),
                tree.reached()
            );
            let routes = tree.into_routes(graph);
            on_solved(completed.fetch_add(1, Ordering::Relaxed) + 1);
            Ok((graph.id(source).to_string(), routes))
        };

        let results: Result<Vec<(String, Routes)>> = if parallel {
            let sources: Vec<NodeIndex> = graph.indices().collect();
            let run = || -> Result<Vec<(String, Routes)>> {
                sources.into_par_iter().map(&solve_one).collect()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        } else {
            graph.indices().map(&solve_one).collect()
        };

        let results = match results {
            Ok(results) => results,
            Err(e) => {
                warn!("Routing table computation aborted: {}", e);
                return Err(e);
            }
        };

        let table: RoutingTable = results.into_iter().collect();
        info!(
            "Computed {} routes across {} sources",
            table.route_count(),
            table.source_count()
        );
        Ok(table)
    }
}

impl Default for ShortestPathSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl std::fmt::Debug for ShortestPathSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortestPathSolver")
            .field("config", &self.config)
            .field("dedicated_pool", &self.pool.is_some())
            .finish()
    }
}
