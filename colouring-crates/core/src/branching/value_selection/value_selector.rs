use crate::basic_types::Colour;
use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// A trait containing the interface for [`ValueSelector`]s, specifying the order in which the
/// search tries the candidate colours of the variable it branches on.
pub trait ValueSelector {
    /// Returns every value in the current domain of `decision_variable` exactly once, in the order
    /// in which they should be tried.
    fn order_values(
        &mut self,
        context: &SelectionContext,
        decision_variable: VariableId,
    ) -> Vec<Colour>;
}
