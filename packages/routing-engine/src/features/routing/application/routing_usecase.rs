//! Routing UseCase Implementation
//!
//! records → GraphBuilder → Graph → ShortestPathSolver → RoutingTable → sink

use std::time::Instant;
use tracing::info;

use crate::config::RoutingConfig;
use crate::errors::Result;
use crate::features::graph_builder::{GraphBuilder, GraphStats};
use crate::features::routing::domain::{NetworkSource, RoutingTableSink};
use crate::features::shortest_path::{RoutingTable, ShortestPathSolver};
use crate::shared::models::{Edge, Node};
use crate::shared::CancellationToken;

/// Input for one routing run
pub struct RoutingInput<'a> {
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
}

/// Output from a routing run
#[derive(Debug, Clone)]
pub struct RoutingOutput {
    pub table: RoutingTable,
    pub stats: RoutingStats,
}

/// Routing run statistics
#[derive(Debug, Clone, Default)]
pub struct RoutingStats {
    pub graph: GraphStats,
    pub sources: usize,
    pub routes: usize,
    pub build_ms: u128,
    pub solve_ms: u128,
}

/// Routing UseCase Trait
pub trait RoutingUseCase: Send + Sync {
    /// Build and solve in memory
    fn compute(&self, input: RoutingInput) -> Result<RoutingOutput>;

    /// Load from `source`, compute, hand the table to `sink`
    fn run(&self, source: &dyn NetworkSource, sink: &dyn RoutingTableSink) -> Result<RoutingStats>;
}

/// Routing UseCase Implementation
#[derive(Debug, Default)]
pub struct RoutingUseCaseImpl {
    builder: GraphBuilder,
    solver: ShortestPathSolver,
    cancel: CancellationToken,
}

impl RoutingUseCaseImpl {
    pub fn new(builder: GraphBuilder, solver: ShortestPathSolver) -> Self {
        Self {
            builder,
            solver,
            cancel: CancellationToken::new(),
        }
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(
            GraphBuilder::from_config(config),
            ShortestPathSolver::from_config(config),
        )
    }

    /// Share a cancellation token with the caller
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }
}

impl RoutingUseCase for RoutingUseCaseImpl {
    fn compute(&self, input: RoutingInput) -> Result<RoutingOutput> {
        let started = Instant::now();
        let graph = self.builder.build(input.nodes, input.edges)?;
        let build_ms = started.elapsed().as_millis();

        let started = Instant::now();
        let table = self.solver.solve_all_with_cancel(&graph, &self.cancel)?;
        let solve_ms = started.elapsed().as_millis();

        let stats = RoutingStats {
            graph: graph.stats().clone(),
            sources: table.source_count(),
            routes: table.route_count(),
            build_ms,
            solve_ms,
        };

        Ok(RoutingOutput { table, stats })
    }

    fn run(&self, source: &dyn NetworkSource, sink: &dyn RoutingTableSink) -> Result<RoutingStats> {
        info!("Routing engine started");

        let network = source.load_network()?;
        let output = self.compute(RoutingInput {
            nodes: &network.nodes,
            edges: &network.edges,
        })?;
        sink.persist(&output.table)?;

        info!(
            "Routing engine completed successfully: {} sources, {} routes (build {} ms, solve {} ms)",
            output.stats.sources, output.stats.routes, output.stats.build_ms, output.stats.solve_ms
        );
        Ok(output.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::features::routing::infrastructure::{InMemoryNetworkSource, InMemoryRoutingTableSink};

    fn source() -> InMemoryNetworkSource {
        InMemoryNetworkSource::new(
            vec![Node::new("A"), Node::new("B"), Node::new("C")],
            vec![Edge::new("A", "B", 2.0), Edge::new("B", "C", 2.0)],
        )
    }

    #[test]
    fn test_run_persists_table() {
        let sink = InMemoryRoutingTableSink::new();
        let usecase = RoutingUseCaseImpl::from_config(&RoutingConfig::default());

        let stats = usecase.run(&source(), &sink).unwrap();
        assert_eq!(stats.sources, 3);
        assert_eq!(stats.routes, 3 + 2 + 1);
        assert_eq!(stats.graph.edge_count, 2);

        let table = sink.latest().unwrap();
        assert_eq!(table.cost("A", "C"), Some(4.0));
    }

    #[test]
    fn test_build_failure_skips_sink() {
        let sink = InMemoryRoutingTableSink::new();
        let bad = InMemoryNetworkSource::new(vec![Node::new("A")], vec![Edge::new("A", "B", 1.0)]);

        let err = RoutingUseCaseImpl::default().run(&bad, &sink).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DanglingEdge);
        assert_eq!(sink.write_count(), 0);
    }

    #[test]
    fn test_cancelled_run_skips_sink() {
        let cancel = CancellationToken::new();
        let usecase = RoutingUseCaseImpl::default().with_cancellation(cancel.clone());
        cancel.cancel();

        let sink = InMemoryRoutingTableSink::new();
        let err = usecase.run(&source(), &sink).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert!(sink.latest().is_none());
    }
}
