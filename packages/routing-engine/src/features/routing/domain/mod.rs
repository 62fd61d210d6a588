mod ports;

pub use ports::{NetworkDocument, NetworkSource, RoutingTableSink};
