mod assignment;
mod backtracking_search;
mod constraint_graph;
pub(crate) mod domains;
mod search_options;
mod search_statistics;
pub(crate) mod variables;

pub use assignment::Assignment;
pub use backtracking_search::BacktrackingSearch;
pub use constraint_graph::*;
pub use domains::DomainStore;
pub use search_options::*;
pub use search_statistics::SearchStatistics;
