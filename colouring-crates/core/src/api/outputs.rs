use crate::basic_types::Solution;

/// The result of a call to [`Solver::satisfy`](crate::Solver::satisfy).
///
/// Note that unsatisfiability is a regular outcome of the search and not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// Indicates that a colouring was found and provides it as a [`Solution`].
    Satisfiable(Solution),
    /// Indicates that no colouring of the graph with the given palette exists.
    Unsatisfiable,
}

impl SatisfactionResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatisfactionResult::Satisfiable(_))
    }

    /// Returns the solution if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SatisfactionResult::Satisfiable(solution) => Some(solution),
            SatisfactionResult::Unsatisfiable => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SatisfactionResult::Satisfiable(solution) => Some(solution),
            SatisfactionResult::Unsatisfiable => None,
        }
    }
}
