use std::time::Instant;

use log::trace;

use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::colouring_assert_simple;
use crate::engine::Assignment;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;
use crate::engine::SearchStatistics;
use crate::propagation::ArcConsistency;

/// Depth-first search over partial assignments, interleaved with arc consistency.
///
/// Every search node selects an unassigned variable with the [`VariableSelector`] and tries its
/// values in the order given by the [`ValueSelector`]. A value is only tried if no assigned
/// neighbour holds it. Trying a value assigns it, clones the domains of the node and runs
/// [`ArcConsistency`] on the clone; if propagation succeeds the search descends with the clone.
/// If propagation fails, or the subtree contains no solution, the assignment is undone and the
/// next value is tried. The first complete assignment found ends the search.
///
/// The [`Assignment`] is shared by all nodes and follows the recursion in stack order, whereas the
/// [`DomainStore`] of a node is private to that node: siblings always see the domains of their
/// parent.
pub struct BacktrackingSearch<'a, VarSelector: ?Sized, ValSelector: ?Sized> {
    graph: &'a ConstraintGraph,
    variable_selector: &'a mut VarSelector,
    value_selector: &'a mut ValSelector,
    propagator: ArcConsistency,
    /// Whether the domain of a tentatively assigned variable is narrowed to its value before
    /// propagation
    propagate_assignments: bool,
    statistics: SearchStatistics,
}

impl<VarSelector: ?Sized, ValSelector: ?Sized> std::fmt::Debug
    for BacktrackingSearch<'_, VarSelector, ValSelector>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BacktrackingSearch")
            .field("propagate_assignments", &self.propagate_assignments)
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}

impl<'a, VarSelector, ValSelector> BacktrackingSearch<'a, VarSelector, ValSelector>
where
    VarSelector: VariableSelector + ?Sized,
    ValSelector: ValueSelector + ?Sized,
{
    pub fn new(
        graph: &'a ConstraintGraph,
        variable_selector: &'a mut VarSelector,
        value_selector: &'a mut ValSelector,
        propagate_assignments: bool,
    ) -> Self {
        BacktrackingSearch {
            graph,
            variable_selector,
            value_selector,
            propagator: ArcConsistency::new(),
            propagate_assignments,
            statistics: SearchStatistics::default(),
        }
    }

    /// Searches for an extension of `assignment` which assigns every variable, starting from the
    /// given root domains.
    ///
    /// Returns `true` if one was found, in which case `assignment` is complete. Otherwise
    /// `assignment` is left as it was passed in.
    pub fn search(&mut self, domains: &DomainStore, assignment: &mut Assignment) -> bool {
        colouring_assert_simple!(
            domains.num_variables() == self.graph.num_variables(),
            "The domain store does not match the constraint graph"
        );

        let start = Instant::now();
        let found = self.backtrack(domains, assignment);
        self.statistics.time_spent_in_search += start.elapsed();

        found
    }

    /// Returns the statistics gathered by all calls to [`BacktrackingSearch::search`] so far.
    pub fn statistics(&self) -> SearchStatistics {
        SearchStatistics {
            propagation: *self.propagator.statistics(),
            ..self.statistics
        }
    }

    fn backtrack(&mut self, domains: &DomainStore, assignment: &mut Assignment) -> bool {
        if assignment.is_complete() {
            return true;
        }

        let context = SelectionContext::new(self.graph, domains, assignment);
        let Some(variable) = self.variable_selector.select_variable(&context) else {
            return false;
        };
        let candidates = self.value_selector.order_values(&context, variable);

        for value in candidates {
            if !assignment.is_consistent(self.graph, variable, value) {
                continue;
            }

            assignment.assign(variable, value);
            self.statistics.num_nodes += 1;
            self.statistics.peak_depth = self
                .statistics
                .peak_depth
                .max(assignment.num_assigned() as u64);
            trace!(
                "Depth {}: trying {variable} = {value}",
                assignment.num_assigned()
            );

            let mut branch_domains = domains.clone();
            self.statistics.num_domain_clones += 1;
            if self.propagate_assignments {
                let _ = branch_domains.narrow_to(variable, value);
            }

            if self
                .propagator
                .propagate(self.graph, &mut branch_domains)
                .is_ok()
                && self.backtrack(&branch_domains, assignment)
            {
                return true;
            }

            let undone = assignment.undo_last();
            colouring_assert_simple!(
                undone == Some((variable, value)),
                "Backtracking should undo the most recent decision {variable} = {value}, undid {undone:?}"
            );
            self.statistics.num_backtracks += 1;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::value_selection::InDomainOrder;
    use crate::branching::value_selection::LeastConstrainingValue;
    use crate::branching::variable_selection::InputOrder;
    use crate::branching::variable_selection::MinimumRemainingValues;
    use crate::engine::variables::VariableId;

    fn run(
        graph: &ConstraintGraph,
        palette_size: u32,
        propagate_assignments: bool,
    ) -> (Option<Vec<u32>>, SearchStatistics) {
        let mut variable_selector = MinimumRemainingValues::new();
        let mut value_selector = LeastConstrainingValue;
        let mut search = BacktrackingSearch::new(
            graph,
            &mut variable_selector,
            &mut value_selector,
            propagate_assignments,
        );

        let domains = DomainStore::new(graph.num_variables(), palette_size);
        let mut assignment = Assignment::new(graph.num_variables());
        let found = search.search(&domains, &mut assignment);

        let colours = found.then(|| {
            graph
                .variables()
                .map(|variable| assignment.value_of(variable).unwrap())
                .collect()
        });
        (colours, search.statistics())
    }

    fn triangle() -> ConstraintGraph {
        ConstraintGraph::from_edges([(1, 2), (2, 3), (1, 3)]).expect("no self-loops")
    }

    #[test]
    fn triangle_with_three_colours_follows_heuristic_order() {
        let (colours, statistics) = run(&triangle(), 3, false);

        assert_eq!(colours, Some(vec![1, 2, 3]));
        assert_eq!(statistics.num_nodes, 3);
        assert_eq!(statistics.num_backtracks, 0);
        assert_eq!(statistics.peak_depth, 3);
    }

    #[test]
    fn triangle_with_two_colours_fails() {
        let (colours, statistics) = run(&triangle(), 2, false);

        assert_eq!(colours, None);
        assert_eq!(statistics.num_nodes, statistics.num_backtracks);
    }

    #[test]
    fn path_with_two_colours_alternates() {
        let graph = ConstraintGraph::from_edges([(1, 2), (2, 3)]).expect("no self-loops");

        let (colours, _) = run(&graph, 2, false);

        assert_eq!(colours, Some(vec![1, 2, 1]));
    }

    #[test]
    fn narrowing_assignments_detects_failures_by_propagation() {
        let (colours, statistics) = run(&triangle(), 2, true);

        assert_eq!(colours, None);
        assert!(statistics.propagation.num_wipeouts > 0);
    }

    #[test]
    fn narrowing_assignments_finds_the_same_colouring() {
        let graph = ConstraintGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)])
            .expect("no self-loops");

        let (without, _) = run(&graph, 3, false);
        let (with, _) = run(&graph, 3, true);

        assert!(without.is_some());
        assert!(with.is_some());
    }

    #[test]
    fn failed_search_leaves_assignment_untouched() {
        let graph = triangle();
        let mut variable_selector = InputOrder;
        let mut value_selector = InDomainOrder;
        let mut search =
            BacktrackingSearch::new(&graph, &mut variable_selector, &mut value_selector, false);

        let domains = DomainStore::new(graph.num_variables(), 2);
        let mut assignment = Assignment::new(graph.num_variables());
        assert!(!search.search(&domains, &mut assignment));

        assert_eq!(assignment.num_assigned(), 0);
        assert!(!assignment.is_assigned(VariableId::new(0)));
    }

    #[test]
    fn backtracking_only_undoes_its_own_decisions() {
        // With 2 and 4 fixed, vertices 1 and 3 both need colour 3 but are adjacent.
        let graph = ConstraintGraph::from_edges([(1, 2), (2, 3), (3, 4), (1, 4), (1, 3)])
            .expect("no self-loops");
        let mut variable_selector = InputOrder;
        let mut value_selector = InDomainOrder;
        let mut search =
            BacktrackingSearch::new(&graph, &mut variable_selector, &mut value_selector, false);

        let domains = DomainStore::new(graph.num_variables(), 3);
        let mut assignment = Assignment::new(graph.num_variables());
        assignment.assign(VariableId::new(1), 1);
        assignment.assign(VariableId::new(3), 2);
        assert!(!search.search(&domains, &mut assignment));

        assert!(search.statistics().num_backtracks > 0);
        assert_eq!(assignment.num_assigned(), 2);
        assert_eq!(assignment.value_of(VariableId::new(1)), Some(1));
        assert_eq!(assignment.value_of(VariableId::new(3)), Some(2));
        assert_eq!(assignment.undo_last(), Some((VariableId::new(3), 2)));
        assert_eq!(assignment.undo_last(), Some((VariableId::new(1), 1)));
    }

    #[test]
    fn empty_graph_is_trivially_satisfied() {
        let graph = ConstraintGraph::from_edges([]).expect("no self-loops");

        let (colours, statistics) = run(&graph, 0, false);

        assert_eq!(colours, Some(vec![]));
        assert_eq!(statistics.num_nodes, 0);
    }

    #[test]
    fn empty_palette_fails_on_the_first_variable() {
        let graph = ConstraintGraph::from_edges([(1, 2)]).expect("no self-loops");

        let (colours, statistics) = run(&graph, 0, false);

        assert_eq!(colours, None);
        assert_eq!(statistics.num_nodes, 0);
    }
}
