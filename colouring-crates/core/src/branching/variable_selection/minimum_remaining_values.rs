use log::debug;

use super::VariableSelector;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::engine::variables::VariableId;

/// A [`VariableSelector`] which selects the unassigned variable with the fewest values remaining in
/// its domain at the current search node.
///
/// Ties are resolved by an [`InOrderTieBreaker`], so the lowest [`VariableId`] wins.
#[derive(Debug, Default)]
pub struct MinimumRemainingValues {
    tie_breaker: InOrderTieBreaker<VariableId, usize>,
}

impl MinimumRemainingValues {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VariableSelector for MinimumRemainingValues {
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VariableId> {
        context.unassigned_variables().for_each(|variable| {
            let domain_size = context.get_size_of_domain(variable);
            if domain_size == 0 {
                debug!("Unassigned variable {variable} has an empty domain");
            }
            self.tie_breaker.consider(variable, domain_size);
        });

        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Assignment;
    use crate::engine::ConstraintGraph;
    use crate::engine::DomainStore;

    fn star() -> ConstraintGraph {
        ConstraintGraph::from_edges([(1, 2), (1, 3), (1, 4)]).expect("no self-loops")
    }

    #[test]
    fn smallest_domain_is_selected() {
        let graph = star();
        let mut domains = DomainStore::new(graph.num_variables(), 3);
        let _ = domains.remove_value(VariableId::new(2), 1);
        let _ = domains.remove_value(VariableId::new(3), 1);
        let _ = domains.remove_value(VariableId::new(3), 2);
        let assignment = Assignment::new(graph.num_variables());

        let context = SelectionContext::new(&graph, &domains, &assignment);
        let selected = MinimumRemainingValues::new().select_variable(&context);

        assert_eq!(selected, Some(VariableId::new(3)));
    }

    #[test]
    fn ties_are_broken_by_lowest_identifier() {
        let graph = star();
        let domains = DomainStore::new(graph.num_variables(), 3);
        let assignment = Assignment::new(graph.num_variables());

        let context = SelectionContext::new(&graph, &domains, &assignment);
        let selected = MinimumRemainingValues::new().select_variable(&context);

        assert_eq!(selected, Some(VariableId::new(0)));
    }

    #[test]
    fn assigned_variables_are_not_selected() {
        let graph = star();
        let mut domains = DomainStore::new(graph.num_variables(), 3);
        let _ = domains.narrow_to(VariableId::new(1), 2);
        let mut assignment = Assignment::new(graph.num_variables());
        assignment.assign(VariableId::new(1), 2);

        let context = SelectionContext::new(&graph, &domains, &assignment);
        let selected = MinimumRemainingValues::new().select_variable(&context);

        assert_eq!(selected, Some(VariableId::new(0)));
    }

    #[test]
    fn nothing_is_selected_when_all_variables_are_assigned() {
        let graph = ConstraintGraph::from_edges([(1, 2)]).expect("no self-loops");
        let domains = DomainStore::new(graph.num_variables(), 2);
        let mut assignment = Assignment::new(graph.num_variables());
        assignment.assign(VariableId::new(0), 1);
        assignment.assign(VariableId::new(1), 2);

        let context = SelectionContext::new(&graph, &domains, &assignment);

        assert!(MinimumRemainingValues::new()
            .select_variable(&context)
            .is_none());
    }
}
