use itertools::Itertools;

use super::ValueSelector;
use crate::basic_types::Colour;
use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// [`ValueSelector`] which orders the values of the decision variable by ascending conflict count.
///
/// The conflict count of a value is the number of neighbours of the decision variable whose current
/// domain still contains that value (see [`conflict_count`]). Values with equal counts keep their
/// domain order.
#[derive(Debug, Copy, Clone, Default)]
pub struct LeastConstrainingValue;

impl ValueSelector for LeastConstrainingValue {
    fn order_values(
        &mut self,
        context: &SelectionContext,
        decision_variable: VariableId,
    ) -> Vec<Colour> {
        context
            .domain_of(decision_variable)
            .iter()
            .map(|value| (value, conflict_count(context, decision_variable, value)))
            .sorted_by_key(|&(_, num_conflicts)| num_conflicts)
            .map(|(value, _)| value)
            .collect()
    }
}

/// The number of neighbours of `variable` which currently have `value` in their domain.
pub fn conflict_count(context: &SelectionContext, variable: VariableId, value: Colour) -> usize {
    context
        .graph()
        .neighbours(variable)
        .iter()
        .filter(|&&neighbour| context.domain_of(neighbour).contains(value))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::value_selection::InDomainOrder;
    use crate::engine::Assignment;
    use crate::engine::ConstraintGraph;
    use crate::engine::DomainStore;

    #[test]
    fn values_are_ordered_by_ascending_conflicts() {
        // x0 is adjacent to x1, x2 and x3
        let graph = ConstraintGraph::from_edges([(1, 2), (1, 3), (1, 4)]).expect("no self-loops");
        let mut domains = DomainStore::new(graph.num_variables(), 3);
        // colour 1 remains for all three neighbours, colour 2 for one, colour 3 for two
        let _ = domains.remove_value(VariableId::new(1), 2);
        let _ = domains.remove_value(VariableId::new(2), 2);
        let _ = domains.remove_value(VariableId::new(3), 3);
        let assignment = Assignment::new(graph.num_variables());

        let context = SelectionContext::new(&graph, &domains, &assignment);

        assert_eq!(conflict_count(&context, VariableId::new(0), 1), 3);
        assert_eq!(conflict_count(&context, VariableId::new(0), 2), 1);
        assert_eq!(conflict_count(&context, VariableId::new(0), 3), 2);
        assert_eq!(
            LeastConstrainingValue.order_values(&context, VariableId::new(0)),
            vec![2, 3, 1]
        );
    }

    #[test]
    fn ties_keep_domain_order() {
        let graph = ConstraintGraph::from_edges([(1, 2)]).expect("no self-loops");
        let mut domains = DomainStore::new(graph.num_variables(), 4);
        let _ = domains.remove_value(VariableId::new(1), 3);
        let assignment = Assignment::new(graph.num_variables());

        let context = SelectionContext::new(&graph, &domains, &assignment);

        assert_eq!(
            LeastConstrainingValue.order_values(&context, VariableId::new(0)),
            vec![3, 1, 2, 4]
        );
    }

    #[test]
    fn uniform_conflicts_keep_domain_order() {
        let graph = ConstraintGraph::from_edges([(1, 2)]).expect("no self-loops");
        let domains = DomainStore::new(graph.num_variables(), 3);
        let assignment = Assignment::new(graph.num_variables());

        let context = SelectionContext::new(&graph, &domains, &assignment);

        assert_eq!(
            LeastConstrainingValue.order_values(&context, VariableId::new(0)),
            InDomainOrder.order_values(&context, VariableId::new(0))
        );
    }
}
