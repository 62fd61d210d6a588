//! Routing - One complete routing run
//!
//! # Hexagonal Architecture
//! ```text
//! Orchestration (CLI, schedulers)
//!           ↓
//! application/ (RoutingUseCase: source → build → solve → sink)
//!           ↓
//! domain/ (NetworkSource, RoutingTableSink ports)
//!           ↓
//! infrastructure/ (InMemory, JSON adapters)
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{RoutingInput, RoutingOutput, RoutingStats, RoutingUseCase, RoutingUseCaseImpl};
pub use domain::{NetworkDocument, NetworkSource, RoutingTableSink};

pub use infrastructure::{
    routing_table_to_json, InMemoryNetworkSource, InMemoryRoutingTableSink, JsonNetworkSource,
    JsonRoutingTableWriter,
};
