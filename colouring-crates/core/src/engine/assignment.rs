use crate::basic_types::Colour;
use crate::colouring_assert_simple;
use crate::containers::KeyedVec;
use crate::engine::variables::VariableId;
use crate::engine::ConstraintGraph;

/// The partial mapping from variables to colours built up by the search.
///
/// A single assignment lives for the whole search. Variables are assigned on descent and undone on
/// backtrack in strict stack order; the trail records that order so that [`Assignment::undo_last`]
/// always removes the most recent decision.
#[derive(Clone, Debug)]
pub struct Assignment {
    values: KeyedVec<VariableId, Option<Colour>>,
    trail: Vec<VariableId>,
}

impl Assignment {
    pub fn new(num_variables: usize) -> Assignment {
        Assignment {
            values: KeyedVec::filled(num_variables, None),
            trail: Vec::with_capacity(num_variables),
        }
    }

    pub fn value_of(&self, variable: VariableId) -> Option<Colour> {
        self.values[variable]
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.values[variable].is_some()
    }

    /// The number of variables which are currently assigned; this equals the search depth.
    pub fn num_assigned(&self) -> usize {
        self.trail.len()
    }

    /// Returns whether every variable has been assigned.
    pub fn is_complete(&self) -> bool {
        self.trail.len() == self.values.len()
    }

    /// Assigns `value` to the currently unassigned `variable`.
    pub fn assign(&mut self, variable: VariableId, value: Colour) {
        colouring_assert_simple!(
            self.values[variable].is_none(),
            "Variable {variable} was assigned twice without being undone"
        );

        self.values[variable] = Some(value);
        self.trail.push(variable);
    }

    /// Undoes the most recent assignment, returning the variable and the value it held.
    pub fn undo_last(&mut self) -> Option<(VariableId, Colour)> {
        let variable = self.trail.pop()?;
        self.values[variable]
            .take()
            .map(|value| (variable, value))
    }

    /// Returns whether no assigned neighbour of `variable` holds `value`.
    pub fn is_consistent(&self, graph: &ConstraintGraph, variable: VariableId, value: Colour) -> bool {
        graph
            .neighbours(variable)
            .iter()
            .all(|&neighbour| self.values[neighbour] != Some(value))
    }

    /// Iterates over the assigned variables in the order in which they were assigned.
    pub fn trail(&self) -> impl Iterator<Item = (VariableId, Colour)> + '_ {
        self.trail
            .iter()
            .filter_map(|&variable| self.values[variable].map(|value| (variable, value)))
    }
}
