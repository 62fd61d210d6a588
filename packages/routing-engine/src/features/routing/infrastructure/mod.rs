//! Port adapters
//!
//! - InMemory: tests and embedding callers that already hold the records
//! - JSON: local network documents in, routing table documents out

mod json;
mod memory;

pub use json::{routing_table_to_json, JsonNetworkSource, JsonRoutingTableWriter};
pub use memory::{InMemoryNetworkSource, InMemoryRoutingTableSink};
