/// Chooses among variables with scores, preferring the lowest score.
///
/// Variable selectors feed every candidate through [`TieBreaker::consider`] and then take the
/// choice with [`TieBreaker::select`]; implementations decide which candidate wins when several
/// share the lowest score.
pub trait TieBreaker<Var, Score> {
    fn consider(&mut self, variable: Var, score: Score);

    /// The chosen variable, if any was considered. Resets the tie-breaker for the next search node.
    fn select(&mut self) -> Option<Var>;
}
