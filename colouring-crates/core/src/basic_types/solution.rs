use itertools::Itertools;

use crate::basic_types::Colour;
use crate::colouring_assert_simple;
use crate::containers::KeyedVec;
use crate::engine::variables::VariableId;
use crate::engine::Assignment;
use crate::engine::ConstraintGraph;

/// A complete colouring produced by the solver.
///
/// The solution owns a copy of the vertex labels, so it can be reported without access to the
/// [`ConstraintGraph`] it was computed for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    labels: KeyedVec<VariableId, i32>,
    colours: KeyedVec<VariableId, Colour>,
}

impl Solution {
    pub(crate) fn new(graph: &ConstraintGraph, assignment: &Assignment) -> Solution {
        colouring_assert_simple!(
            assignment.is_complete(),
            "A solution can only be extracted from a complete assignment"
        );

        let (labels, colours): (Vec<i32>, Vec<Colour>) = graph
            .variables()
            .filter_map(|variable| {
                assignment
                    .value_of(variable)
                    .map(|colour| (graph.label(variable), colour))
            })
            .unzip();

        Solution {
            labels: labels.into(),
            colours: colours.into(),
        }
    }

    /// Returns the number of coloured variables.
    pub fn num_variables(&self) -> usize {
        self.colours.len()
    }

    pub fn colour_of(&self, variable: VariableId) -> Colour {
        self.colours[variable]
    }

    /// Returns the colour of the vertex with the given input label, if such a vertex exists.
    pub fn colour_of_label(&self, label: i32) -> Option<Colour> {
        self.labels
            .entries()
            .find(|(_, candidate)| **candidate == label)
            .map(|(variable, _)| self.colours[variable])
    }

    /// Iterates over `(label, colour)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, Colour)> + '_ {
        self.labels
            .entries()
            .map(|(variable, &label)| (label, self.colours[variable]))
    }

    /// The number of distinct colours used by this solution.
    pub fn num_colours_used(&self) -> usize {
        self.colours.iter().unique().count()
    }

    /// Returns whether this solution assigns exactly the variables of `graph`.
    pub fn is_complete_for(&self, graph: &ConstraintGraph) -> bool {
        self.num_variables() == graph.num_variables()
            && graph
                .variables()
                .all(|variable| self.labels[variable] == graph.label(variable))
    }

    /// Lists every edge of `graph`, by label, whose endpoints received the same colour.
    pub fn violated_constraints(&self, graph: &ConstraintGraph) -> Vec<(i32, i32)> {
        graph
            .edges()
            .filter(|&(u, v)| self.colours[u] == self.colours[v])
            .map(|(u, v)| (graph.label(u), graph.label(v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ConstraintGraph;

    fn triangle() -> ConstraintGraph {
        ConstraintGraph::from_edges([(1, 2), (2, 3), (1, 3)]).expect("no self-loops")
    }

    fn assign_all(graph: &ConstraintGraph, colours: &[Colour]) -> Assignment {
        let mut assignment = Assignment::new(graph.num_variables());
        for (variable, &colour) in graph.variables().zip(colours) {
            assignment.assign(variable, colour);
        }
        assignment
    }

    #[test]
    #[should_panic(expected = "complete assignment")]
    fn partial_assignment_is_not_a_solution() {
        let graph = triangle();
        let mut assignment = Assignment::new(graph.num_variables());
        assignment.assign(VariableId::new(0), 1);

        let _ = Solution::new(&graph, &assignment);
    }

    #[test]
    fn proper_colouring_has_no_violations() {
        let graph = triangle();
        let solution = Solution::new(&graph, &assign_all(&graph, &[1, 2, 3]));

        assert!(solution.violated_constraints(&graph).is_empty());
        assert!(solution.is_complete_for(&graph));
        assert_eq!(solution.num_colours_used(), 3);
    }

    #[test]
    fn clashing_endpoints_are_reported_by_label() {
        let graph = triangle();
        let solution = Solution::new(&graph, &assign_all(&graph, &[1, 2, 1]));

        assert_eq!(solution.violated_constraints(&graph), vec![(1, 3)]);
    }

    #[test]
    fn solution_is_iterated_in_label_order() {
        let graph = ConstraintGraph::from_edges([(30, 10), (10, 20)]).expect("no self-loops");
        let solution = Solution::new(&graph, &assign_all(&graph, &[1, 2, 1]));

        assert_eq!(
            solution.iter().collect::<Vec<_>>(),
            vec![(10, 1), (20, 2), (30, 1)]
        );
        assert_eq!(solution.colour_of_label(20), Some(2));
        assert_eq!(solution.colour_of_label(40), None);
    }
}
