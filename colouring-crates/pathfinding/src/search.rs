use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::trace;

use crate::graph::HashMap;
use crate::Heuristic;
use crate::WeightedGraph;

/// The outcome of a single shortest-path search together with the work it took.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// The vertices from start to goal, inclusive, if the goal was reached
    pub path: Option<Vec<i32>>,
    /// The total weight of `path`
    pub cost: Option<u64>,
    /// The number of frontier entries popped, including stale ones
    pub num_expanded: u64,
    /// The number of frontier entries pushed after the start vertex
    pub num_pushes: u64,
    /// The largest size of the frontier observed after an expansion
    pub max_frontier: usize,
    pub runtime: Duration,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// A frontier entry; the heap pops the smallest `f`, and among equal `f` the entry pushed first.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    f: f64,
    sequence: u64,
    vertex: i32,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, since `BinaryHeap` is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Best-first search from `start` to `goal` ordered by `f = g + h`.
///
/// Entries are never removed from the frontier when a vertex is reached more cheaply; the
/// outdated entry is simply popped (and counted as expanded) later. The goal test happens when a
/// vertex is popped, and a neighbour is only pushed when the new path to it is strictly cheaper
/// than the best one known. With [`Heuristic::Zero`] this is uniform-cost search.
pub fn shortest_path(
    graph: &WeightedGraph,
    start: i32,
    goal: i32,
    heuristic: Heuristic,
) -> SearchResult {
    let started_at = Instant::now();
    let goal_coordinate = graph.coordinate_of(goal);

    let mut best_cost: HashMap<i32, u64> = HashMap::default();
    let mut parent: HashMap<i32, i32> = HashMap::default();
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0;

    let _ = best_cost.insert(start, 0);
    frontier.push(FrontierEntry {
        f: 0.0,
        sequence,
        vertex: start,
    });

    let mut num_expanded = 0;
    let mut num_pushes = 0;
    let mut max_frontier = 1;

    while let Some(FrontierEntry { vertex, f, .. }) = frontier.pop() {
        num_expanded += 1;
        // Every vertex on the frontier has a recorded cost.
        let cost = best_cost.get(&vertex).copied().unwrap_or_default();
        trace!("Expanding {vertex} with g = {cost} and f = {f}");

        if vertex == goal {
            let path = reconstruct_path(&parent, start, goal);
            debug!(
                "{heuristic}: reached {goal} with cost {cost} after {num_expanded} expansions"
            );
            return SearchResult {
                path: Some(path),
                cost: Some(cost),
                num_expanded,
                num_pushes,
                max_frontier,
                runtime: started_at.elapsed(),
            };
        }

        for edge in graph.edges_of(vertex) {
            let new_cost = cost + u64::from(edge.weight);
            let improves = best_cost
                .get(&edge.to)
                .map_or(true, |&known| new_cost < known);
            if !improves {
                continue;
            }

            let _ = best_cost.insert(edge.to, new_cost);
            let _ = parent.insert(edge.to, vertex);

            sequence += 1;
            let estimate = heuristic.estimate(graph.coordinate_of(edge.to), goal_coordinate);
            frontier.push(FrontierEntry {
                f: new_cost as f64 + estimate,
                sequence,
                vertex: edge.to,
            });
            num_pushes += 1;
        }

        max_frontier = max_frontier.max(frontier.len());
    }

    debug!("{heuristic}: {goal} is unreachable from {start}");
    SearchResult {
        path: None,
        cost: None,
        num_expanded,
        num_pushes,
        max_frontier,
        runtime: started_at.elapsed(),
    }
}

fn reconstruct_path(parent: &HashMap<i32, i32>, start: i32, goal: i32) -> Vec<i32> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parent.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
