use super::ValueSelector;
use crate::basic_types::Colour;
use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// [`ValueSelector`] which tries the values in the order in which they appear in the domain, i.e.
/// the lowest colour first.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainOrder;

impl ValueSelector for InDomainOrder {
    fn order_values(
        &mut self,
        context: &SelectionContext,
        decision_variable: VariableId,
    ) -> Vec<Colour> {
        context.domain_of(decision_variable).values().to_vec()
    }
}
