use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// A trait containing the interface for [`VariableSelector`]s, specifying which variable the search
/// should branch on next.
pub trait VariableSelector {
    /// Determines which unassigned variable to branch on next, or [`None`] if every variable has
    /// been assigned.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId>;
}
