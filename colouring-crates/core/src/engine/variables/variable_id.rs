use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::StorageKey;

/// The dense, solver-internal identifier of a vertex of the
/// [`ConstraintGraph`](crate::ConstraintGraph).
///
/// Identifiers are handed out in ascending order of the vertex labels which appear in the input,
/// so ordering by [`VariableId`] is the same as ordering by label.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId {
    pub id: u32,
}

impl VariableId {
    pub fn new(id: u32) -> Self {
        VariableId { id }
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId { id: index as u32 }
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl Debug for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
