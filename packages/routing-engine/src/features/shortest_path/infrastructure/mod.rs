mod dijkstra;
mod frontier;
mod solver;

pub use solver::{ShortestPathSolver, SolverConfig};
