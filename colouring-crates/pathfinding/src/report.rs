use std::fmt::Display;

use itertools::Itertools;

use crate::Heuristic;
use crate::SearchResult;

/// Renders a [`SearchResult`] as the textual report of one search mode:
///
/// ```text
/// MODE: A* Manhattan
/// Optimal cost: 4
/// Path: [1, 2, 4]
/// Expanded: 3
/// Pushes: 4
/// Max frontier: 2
/// Runtime (s): 0.000012
/// ```
///
/// The `Path` line is omitted and the cost reads `NO PATH` when the goal was not reached.
#[derive(Clone, Copy, Debug)]
pub struct SearchReport<'a> {
    heuristic: Heuristic,
    result: &'a SearchResult,
}

impl<'a> SearchReport<'a> {
    pub fn new(heuristic: Heuristic, result: &'a SearchResult) -> Self {
        SearchReport { heuristic, result }
    }
}

impl Display for SearchReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MODE: {}", self.heuristic.mode_name())?;

        match (&self.result.path, self.result.cost) {
            (Some(path), Some(cost)) => {
                writeln!(f, "Optimal cost: {cost}")?;
                writeln!(f, "Path: [{}]", path.iter().join(", "))?;
            }
            _ => writeln!(f, "Optimal cost: NO PATH")?,
        }

        writeln!(f, "Expanded: {}", self.result.num_expanded)?;
        writeln!(f, "Pushes: {}", self.result.num_pushes)?;
        writeln!(f, "Max frontier: {}", self.result.max_frontier)?;
        write!(f, "Runtime (s): {:.6}", self.result.runtime.as_secs_f64())
    }
}
