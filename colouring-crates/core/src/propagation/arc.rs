use std::fmt::Display;
use std::fmt::Formatter;

use crate::engine::variables::VariableId;
use crate::engine::ConstraintGraph;

/// A directed work item `(target, support)`: prune the domain of `target` using the domain of
/// `support`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arc {
    pub target: VariableId,
    pub support: VariableId,
}

impl Arc {
    pub fn new(target: VariableId, support: VariableId) -> Arc {
        Arc { target, support }
    }

    /// Every arc of `graph`: both directions of each edge, grouped by target in ascending order.
    pub fn all_of(graph: &ConstraintGraph) -> impl Iterator<Item = Arc> + '_ {
        graph.variables().flat_map(move |target| {
            graph
                .neighbours(target)
                .iter()
                .map(move |&support| Arc::new(target, support))
        })
    }
}

impl Display for Arc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.target, self.support)
    }
}
