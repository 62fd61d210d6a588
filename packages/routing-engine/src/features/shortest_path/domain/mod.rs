//! Routing table domain model

mod routing_table;

pub use routing_table::{RouteEntry, Routes, RoutingTable};
