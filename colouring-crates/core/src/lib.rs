//! # Colouring core
//! A solver for the graph-colouring constraint satisfaction problem: given an undirected graph and
//! a palette of `K` colours, assign every vertex a colour in `1..=K` such that adjacent vertices
//! receive different colours.
//!
//! The solver combines a depth-first [`BacktrackingSearch`] with the AC-3 arc consistency
//! algorithm ([`propagation::ArcConsistency`]). By default, the next variable is chosen with the
//! minimum-remaining-values heuristic and its values are tried in least-constraining order; see
//! the [`branching`] module for the alternatives.
//!
//! # Using the solver
//! An instance consists of a [`ConstraintGraph`] and a palette size. The graph can be built from a
//! list of edges, with a [`ConstraintGraphBuilder`], or read from a file with
//! [`parsers::read_instance_file`]:
//! ```rust
//! # use colouring_core::parsers::parse_instance;
//! # use colouring_core::results::SatisfactionResult;
//! # use colouring_core::Solver;
//! let source = "colors=2\n1,2\n2,3\n";
//! let instance = parse_instance(source.as_bytes()).unwrap();
//!
//! let mut solver = Solver::from(instance);
//! let result = solver.satisfy();
//!
//! let SatisfactionResult::Satisfiable(solution) = result else {
//!     panic!("a path is 2-colourable");
//! };
//! let colours = solution.iter().collect::<Vec<_>>();
//! assert_eq!(colours, vec![(1, 1), (2, 2), (3, 1)]);
//! ```
//!
//! The heuristics and propagation strength can be configured through
//! [`options::SearchOptions`]:
//! ```rust
//! # use colouring_core::options::SearchOptions;
//! # use colouring_core::options::VariableSelection;
//! # use colouring_core::results::SatisfactionResult;
//! # use colouring_core::ConstraintGraph;
//! # use colouring_core::Solver;
//! let graph = ConstraintGraph::from_edges([(1, 2), (2, 3), (1, 3)]).unwrap();
//! let options = SearchOptions {
//!     variable_selection: VariableSelection::InputOrder,
//!     propagate_assignments: true,
//!     ..Default::default()
//! };
//!
//! let mut solver = Solver::with_options(graph, 2, options);
//! assert_eq!(solver.satisfy(), SatisfactionResult::Unsatisfiable);
//! ```
//!
//! ## Feature Flags
//! - `clap`: Derive `clap::ValueEnum` for the heuristic options.
//! - `debug-checks`: Enable expensive assertions in the solver.
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod colouring_asserts;
pub(crate) mod engine;

pub mod branching;
pub mod parsers;
pub mod propagation;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::basic_types::Colour;
pub use crate::basic_types::EmptyDomain;
pub use crate::basic_types::PropagationStatus;
pub use crate::engine::Assignment;
pub use crate::engine::BacktrackingSearch;
pub use crate::engine::ConstraintGraph;
pub use crate::engine::ConstraintGraphBuilder;
pub use crate::engine::DomainStore;
pub use crate::engine::SearchStatistics;
pub use crate::engine::SelfLoop;
pub use crate::engine::domains::Domain;
