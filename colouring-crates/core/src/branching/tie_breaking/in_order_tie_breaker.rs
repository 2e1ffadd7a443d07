use super::TieBreaker;

/// A tie-breaker which keeps the first variable it receives with the lowest score.
///
/// The variable selectors feed variables in ascending [`VariableId`] order, so with this
/// tie-breaker a tie is always resolved in favour of the lowest identifier.
///
/// [`VariableId`]: crate::variables::VariableId
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Score> {
    selected: Option<(Var, Score)>,
}

impl<Var, Score> InOrderTieBreaker<Var, Score> {
    pub fn new() -> Self {
        Self { selected: None }
    }
}

impl<Var, Score> Default for InOrderTieBreaker<Var, Score> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Var: Copy, Score: PartialOrd> TieBreaker<Var, Score> for InOrderTieBreaker<Var, Score> {
    fn consider(&mut self, variable: Var, score: Score) {
        let is_improvement = match &self.selected {
            None => true,
            Some((_, selected_score)) => score < *selected_score,
        };

        if is_improvement {
            self.selected = Some((variable, score));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }
}
