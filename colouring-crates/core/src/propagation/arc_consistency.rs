use std::collections::VecDeque;

use log::trace;

use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::colouring_assert_moderate;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;
use crate::propagation::Arc;

/// Counters describing the work done by an [`ArcConsistency`] propagator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PropagationStatistics {
    /// The number of times [`ArcConsistency::propagate`] was called
    pub num_calls: u64,
    /// The number of calls which ended with an empty domain
    pub num_wipeouts: u64,
    /// The number of arcs taken from the worklist
    pub num_arcs_processed: u64,
    /// The number of revisions which removed at least one value
    pub num_revisions: u64,
    /// The total number of values removed from domains
    pub num_values_pruned: u64,
}

/// The AC-3 propagator for inequality constraints.
///
/// A call to [`ArcConsistency::propagate`] seeds the worklist with every arc of the graph (both
/// directions of every edge) and repeatedly revises arcs until the worklist drains or a domain
/// becomes empty. Whenever the domain of `x` shrinks while processing `(x, y)`, the arcs `(z, x)`
/// for every other neighbour `z` of `x` are enqueued again. Duplicate arcs are allowed on the
/// worklist.
///
/// Termination: every re-enqueue is caused by a strict shrink of a finite domain, and domains never
/// grow.
///
/// The worklist buffer is kept between calls to avoid re-allocating it at every search node.
#[derive(Debug, Default)]
pub struct ArcConsistency {
    worklist: VecDeque<Arc>,
    statistics: PropagationStatistics,
}

impl ArcConsistency {
    pub fn new() -> ArcConsistency {
        ArcConsistency::default()
    }

    pub fn statistics(&self) -> &PropagationStatistics {
        &self.statistics
    }

    /// Prunes `domains` in place to the AC-3 fixpoint.
    ///
    /// Returns [`EmptyDomain`] for the first variable whose domain is emptied; the remaining
    /// contents of `domains` are then unspecified and the store should be discarded.
    pub fn propagate(
        &mut self,
        graph: &ConstraintGraph,
        domains: &mut DomainStore,
    ) -> PropagationStatus {
        self.statistics.num_calls += 1;

        self.worklist.clear();
        self.worklist.extend(Arc::all_of(graph));

        while let Some(arc) = self.worklist.pop_front() {
            self.statistics.num_arcs_processed += 1;

            let num_pruned = revise(domains, arc);
            if num_pruned == 0 {
                continue;
            }

            self.statistics.num_revisions += 1;
            self.statistics.num_values_pruned += num_pruned as u64;

            if domains.is_empty(arc.target) {
                trace!("Domain of {} wiped out while revising {arc}", arc.target);
                self.statistics.num_wipeouts += 1;
                self.worklist.clear();
                return Err(EmptyDomain {
                    variable: arc.target,
                });
            }

            self.worklist.extend(
                graph
                    .neighbours(arc.target)
                    .iter()
                    .filter(|&&neighbour| neighbour != arc.support)
                    .map(|&neighbour| Arc::new(neighbour, arc.target)),
            );
        }

        Ok(())
    }
}

/// Revises `arc = (x, y)`: every value `val` of the domain of `x` is removed if the domain of `y`
/// is non-empty and consists solely of `val`.
///
/// Returns the number of values removed from the domain of `x`.
pub fn revise(domains: &mut DomainStore, arc: Arc) -> usize {
    let support = domains.domain_of(arc.support);
    let unsupported = domains
        .domain_of(arc.target)
        .iter()
        .filter(|&value| support.consists_solely_of(value))
        .collect::<Vec<_>>();

    let size_before = domains.size_of(arc.target);
    for &value in unsupported.iter() {
        let _ = domains.remove_value(arc.target, value);
    }
    colouring_assert_moderate!(
        domains.size_of(arc.target) + unsupported.len() == size_before,
        "Revising {arc} should only ever remove values"
    );

    unsupported.len()
}
