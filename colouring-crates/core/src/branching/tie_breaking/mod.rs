//! Contains the tie-breakers which resolve ties between variables which are equally good
//! according to a [`VariableSelector`].
mod in_order_tie_breaker;
mod tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
pub use tie_breaker::TieBreaker;

#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
