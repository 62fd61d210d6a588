//! Feature slices: graph construction → shortest paths → routing runs

pub mod graph_builder;
pub mod routing;
pub mod shortest_path;
