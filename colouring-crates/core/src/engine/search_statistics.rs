use std::time::Duration;

use crate::propagation::PropagationStatistics;
use crate::statistics::StatisticLogger;

/// Statistics collected during a single run of the backtracking search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of tentative assignments made (one per search node below the root)
    pub num_nodes: u64,
    /// The number of tentative assignments which were undone
    pub num_backtracks: u64,
    /// The number of domain stores cloned for a branch
    pub num_domain_clones: u64,
    /// The deepest level reached by the search, i.e. the largest partial assignment
    pub peak_depth: u64,
    /// The time spent in the search
    pub time_spent_in_search: Duration,
    /// The work done by the arc consistency propagator
    pub propagation: PropagationStatistics,
}

impl SearchStatistics {
    pub fn log(&self, statistic_logger: &StatisticLogger) {
        statistic_logger.log_statistic("nodes", self.num_nodes);
        statistic_logger.log_statistic("backtracks", self.num_backtracks);
        statistic_logger.log_statistic("domain_clones", self.num_domain_clones);
        statistic_logger.log_statistic("peak_depth", self.peak_depth);
        statistic_logger.log_statistic("solve_time", self.time_spent_in_search.as_secs_f64());

        let propagation_logger = statistic_logger.attach_to_prefix("ac3");
        propagation_logger.log_statistic("calls", self.propagation.num_calls);
        propagation_logger.log_statistic("wipeouts", self.propagation.num_wipeouts);
        propagation_logger.log_statistic("arcs_processed", self.propagation.num_arcs_processed);
        propagation_logger.log_statistic("revisions", self.propagation.num_revisions);
        propagation_logger.log_statistic("values_pruned", self.propagation.num_values_pruned);
    }
}
