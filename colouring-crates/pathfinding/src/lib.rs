//! # Colouring pathfinding
//! Shortest paths on small weighted grid graphs, searched with uniform-cost search or A* with a
//! Euclidean or Manhattan heuristic.
//!
//! ```rust
//! # use colouring_pathfinding::parse_pathfinding_instance;
//! # use colouring_pathfinding::shortest_path;
//! # use colouring_pathfinding::Heuristic;
//! let source = "S,1\nD,3\n1,0\n2,1\n3,2\n1,2,1\n2,3,1\n1,3,5\n";
//! let instance = parse_pathfinding_instance(source.as_bytes()).unwrap();
//!
//! let result = shortest_path(&instance.graph, instance.start, instance.goal, Heuristic::Manhattan);
//! assert_eq!(result.path, Some(vec![1, 2, 3]));
//! assert_eq!(result.cost, Some(2));
//! ```
mod graph;
mod heuristic;
mod parser;
mod report;
mod search;

pub use graph::Coordinate;
pub use graph::WeightedEdge;
pub use graph::WeightedGraph;
pub use heuristic::Heuristic;
pub use parser::*;
pub use report::SearchReport;
pub use search::*;
