//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait is [`VariableSelector::select_variable`].
//!
//! Two selectors are provided:
//! - [`MinimumRemainingValues`] picks the unassigned variable with the smallest domain.
//! - [`InputOrder`] picks the first unassigned variable.
mod input_order;
mod minimum_remaining_values;
mod variable_selector;

pub use input_order::InputOrder;
pub use minimum_remaining_values::MinimumRemainingValues;
pub use variable_selector::VariableSelector;
