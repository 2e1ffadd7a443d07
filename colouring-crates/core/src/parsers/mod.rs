//! Contains the readers for the instance files accepted by the solver.
mod graph_file;

pub use graph_file::*;
