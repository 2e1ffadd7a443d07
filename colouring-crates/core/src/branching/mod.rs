//! Contains the heuristics which decide how the search explores the space of assignments.
//!
//! At every search node a [`VariableSelector`] chooses the next unassigned variable and a
//! [`ValueSelector`] orders the candidate colours for that variable. Both consult the
//! [`SelectionContext`] of the node, which exposes the graph, the domains live at that node, and
//! the current assignment.
//!
//! The defaults are [`MinimumRemainingValues`] and [`LeastConstrainingValue`]:
//! ```rust
//! # use colouring_core::branching::SelectionContext;
//! # use colouring_core::branching::value_selection::LeastConstrainingValue;
//! # use colouring_core::branching::value_selection::ValueSelector;
//! # use colouring_core::branching::variable_selection::MinimumRemainingValues;
//! # use colouring_core::branching::variable_selection::VariableSelector;
//! # use colouring_core::Assignment;
//! # use colouring_core::ConstraintGraph;
//! # use colouring_core::DomainStore;
//! let graph = ConstraintGraph::from_edges([(1, 2), (2, 3)]).unwrap();
//! let mut domains = DomainStore::new(graph.num_variables(), 3);
//! let middle = graph.variable_with_label(2).unwrap();
//! let _ = domains.remove_value(middle, 3);
//! let assignment = Assignment::new(graph.num_variables());
//!
//! let context = SelectionContext::new(&graph, &domains, &assignment);
//! let variable = MinimumRemainingValues::new().select_variable(&context);
//! assert_eq!(variable, Some(middle));
//!
//! let values = LeastConstrainingValue.order_values(&context, middle);
//! assert_eq!(values, vec![1, 2]);
//! ```
mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use selection_context::SelectionContext;
#[cfg(doc)]
use value_selection::LeastConstrainingValue;
#[cfg(doc)]
use value_selection::ValueSelector;
#[cfg(doc)]
use variable_selection::MinimumRemainingValues;
#[cfg(doc)]
use variable_selection::VariableSelector;
