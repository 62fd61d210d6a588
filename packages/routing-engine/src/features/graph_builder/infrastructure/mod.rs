mod builder;

pub use builder::{build, GraphBuilder};
