//! # Colouring solver
//! A solver for the graph-colouring constraint satisfaction problem, built on backtracking search
//! with arc consistency (AC-3), the minimum-remaining-values variable ordering and the
//! least-constraining-value value ordering.
//!
//! The search engine lives in [`core`]; this crate re-exports it and ships two command-line
//! tools:
//! - `colouring-solver <INSTANCE>` colours the graph described in an instance file and prints one
//!   `Var <id> -> Color <value>` line per vertex, or `failure` if no colouring exists.
//! - `shortest-path <INSTANCE>...` runs uniform-cost search and A* on a weighted grid graph, see
//!   [`pathfinding`].
//!
//! ```rust
//! # use colouring_solver::core::parsers::parse_instance;
//! # use colouring_solver::core::Solver;
//! let instance = parse_instance("colors=3\n1,2\n2,3\n1,3\n".as_bytes()).unwrap();
//! let mut solver = Solver::from(instance);
//!
//! let solution = solver.satisfy().into_solution().unwrap();
//! assert_eq!(solution.num_colours_used(), 3);
//! ```
//!
//! ## Feature Flags
//! - `debug-checks`: Enable expensive assertions in the solver.
pub use colouring_core as core;
pub use colouring_pathfinding as pathfinding;
