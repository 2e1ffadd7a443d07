use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// A [`VariableSelector`] which selects the first unassigned variable in ascending order,
/// regardless of domain sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        context.unassigned_variables().next()
    }
}
