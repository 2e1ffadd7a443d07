use crate::engine::domains::Domain;
use crate::engine::variables::VariableId;
use crate::engine::Assignment;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;

/// A read-only view of the state of a search node, handed to the branching heuristics.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    graph: &'a ConstraintGraph,
    domains: &'a DomainStore,
    assignment: &'a Assignment,
}

impl<'a> SelectionContext<'a> {
    pub fn new(
        graph: &'a ConstraintGraph,
        domains: &'a DomainStore,
        assignment: &'a Assignment,
    ) -> SelectionContext<'a> {
        SelectionContext {
            graph,
            domains,
            assignment,
        }
    }

    pub fn graph(&self) -> &'a ConstraintGraph {
        self.graph
    }

    pub fn domain_of(&self, variable: VariableId) -> &'a Domain {
        self.domains.domain_of(variable)
    }

    pub fn get_size_of_domain(&self, variable: VariableId) -> usize {
        self.domains.size_of(variable)
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.assignment.is_assigned(variable)
    }

    /// Iterates over the unassigned variables in ascending order.
    pub fn unassigned_variables(&self) -> impl Iterator<Item = VariableId> + 'a {
        let assignment = self.assignment;
        self.graph
            .variables()
            .filter(move |&variable| !assignment.is_assigned(variable))
    }
}
