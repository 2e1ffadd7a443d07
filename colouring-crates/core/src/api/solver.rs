use log::debug;
use log::warn;

use super::results::SatisfactionResult;
use crate::basic_types::Colour;
use crate::basic_types::Solution;
use crate::branching::value_selection::InDomainOrder;
use crate::branching::value_selection::LeastConstrainingValue;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::InputOrder;
use crate::branching::variable_selection::MinimumRemainingValues;
use crate::branching::variable_selection::VariableSelector;
use crate::engine::Assignment;
use crate::engine::BacktrackingSearch;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;
use crate::engine::SearchStatistics;
use crate::options::SearchOptions;
use crate::options::ValueSelection;
use crate::options::VariableSelection;
use crate::parsers::ColouringInstance;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::StatisticLogger;

/// The main interaction point which solves a graph-colouring problem.
///
/// The solver owns the [`ConstraintGraph`] and the palette size `K`; every variable starts with the
/// domain `{1, ..., K}`. A call to [`Solver::satisfy`] runs a backtracking search with arc
/// consistency and returns either a colouring or [`SatisfactionResult::Unsatisfiable`].
///
/// # Example
/// ```rust
/// # use colouring_core::ConstraintGraph;
/// # use colouring_core::Solver;
/// # use colouring_core::results::SatisfactionResult;
/// // A triangle can be coloured with three colours...
/// let graph = ConstraintGraph::from_edges([(1, 2), (2, 3), (1, 3)]).unwrap();
/// let mut solver = Solver::new(graph, 3);
///
/// let SatisfactionResult::Satisfiable(solution) = solver.satisfy() else {
///     panic!("a triangle is 3-colourable");
/// };
/// assert!(solution.violated_constraints(solver.graph()).is_empty());
///
/// // ...but not with two.
/// let graph = ConstraintGraph::from_edges([(1, 2), (2, 3), (1, 3)]).unwrap();
/// let mut solver = Solver::new(graph, 2);
/// assert_eq!(solver.satisfy(), SatisfactionResult::Unsatisfiable);
/// ```
#[derive(Debug)]
pub struct Solver {
    graph: ConstraintGraph,
    palette_size: Colour,
    options: SearchOptions,
    /// The statistics of the most recent search
    statistics: SearchStatistics,
}

impl Solver {
    /// Creates a solver with the default [`SearchOptions`].
    pub fn new(graph: ConstraintGraph, palette_size: Colour) -> Self {
        Self::with_options(graph, palette_size, SearchOptions::default())
    }

    pub fn with_options(
        graph: ConstraintGraph,
        palette_size: Colour,
        options: SearchOptions,
    ) -> Self {
        Solver {
            graph,
            palette_size,
            options,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    pub fn palette_size(&self) -> Colour {
        self.palette_size
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Searches for a colouring using the heuristics configured in the [`SearchOptions`].
    pub fn satisfy(&mut self) -> SatisfactionResult {
        let mut variable_selector: Box<dyn VariableSelector> =
            match self.options.variable_selection {
                VariableSelection::Mrv => Box::new(MinimumRemainingValues::new()),
                VariableSelection::InputOrder => Box::new(InputOrder),
            };
        let mut value_selector: Box<dyn ValueSelector> = match self.options.value_selection {
            ValueSelection::Lcv => Box::new(LeastConstrainingValue),
            ValueSelection::InDomainOrder => Box::new(InDomainOrder),
        };

        debug!(
            "Searching with variable selection '{}' and value selection '{}'",
            self.options.variable_selection, self.options.value_selection
        );

        self.satisfy_with(variable_selector.as_mut(), value_selector.as_mut())
    }

    /// Searches for a colouring using the provided heuristics, ignoring the heuristics configured
    /// in the [`SearchOptions`].
    pub fn satisfy_with<VarSelector, ValSelector>(
        &mut self,
        variable_selector: &mut VarSelector,
        value_selector: &mut ValSelector,
    ) -> SatisfactionResult
    where
        VarSelector: VariableSelector + ?Sized,
        ValSelector: ValueSelector + ?Sized,
    {
        if self.graph.num_variables() == 0 {
            warn!("The constraint graph contains no variables; the empty colouring is returned");
        } else if self.palette_size == 0 {
            warn!("The palette contains no colours; no variable can be coloured");
        }

        let domains = DomainStore::new(self.graph.num_variables(), self.palette_size);
        let mut assignment = Assignment::new(self.graph.num_variables());

        let mut search = BacktrackingSearch::new(
            &self.graph,
            variable_selector,
            value_selector,
            self.options.propagate_assignments,
        );
        let found = search.search(&domains, &mut assignment);
        self.statistics = search.statistics();

        if found {
            debug!(
                "Found a colouring after {} nodes and {} backtracks",
                self.statistics.num_nodes, self.statistics.num_backtracks
            );
            SatisfactionResult::Satisfiable(Solution::new(&self.graph, &assignment))
        } else {
            debug!(
                "Search space exhausted after {} nodes and {} backtracks",
                self.statistics.num_nodes, self.statistics.num_backtracks
            );
            SatisfactionResult::Unsatisfiable
        }
    }

    /// Returns the statistics of the most recent call to [`Solver::satisfy`] or
    /// [`Solver::satisfy_with`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Logs the statistics of the most recent search, followed by the statistics postfix.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }

        self.statistics.log(&StatisticLogger::default());
        log_statistic_postfix();
    }
}

impl From<ColouringInstance> for Solver {
    fn from(instance: ColouringInstance) -> Self {
        Solver::new(instance.graph, instance.palette_size)
    }
}
