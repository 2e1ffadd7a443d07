use log::debug;
use thiserror::Error;

use crate::colouring_assert_advanced;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::variables::VariableId;

/// Returned when an edge would connect a vertex to itself; the inequality constraint on such an
/// edge could never be satisfied.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("vertex {label} cannot be adjacent to itself")]
pub struct SelfLoop {
    pub label: i32,
}

/// Collects vertex and edge declarations before freezing them into a [`ConstraintGraph`].
///
/// Declarations may arrive in any order and may be repeated; an edge `(u, v)` is the same
/// declaration as `(v, u)`.
#[derive(Clone, Debug, Default)]
pub struct ConstraintGraphBuilder {
    vertices: HashSet<i32>,
    edges: HashSet<(i32, i32)>,
}

impl ConstraintGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a vertex, which becomes a variable even if it takes part in no edge.
    pub fn add_vertex(&mut self, label: i32) -> &mut Self {
        let _ = self.vertices.insert(label);
        self
    }

    /// Declares an undirected edge between `u` and `v`, implicitly declaring both vertices.
    pub fn add_edge(&mut self, u: i32, v: i32) -> Result<&mut Self, SelfLoop> {
        if u == v {
            return Err(SelfLoop { label: u });
        }

        let _ = self.vertices.insert(u);
        let _ = self.vertices.insert(v);
        let _ = self.edges.insert((u.min(v), u.max(v)));
        Ok(self)
    }

    pub fn build(self) -> ConstraintGraph {
        let mut labels = self.vertices.into_iter().collect::<Vec<_>>();
        labels.sort_unstable();

        let ids_by_label = labels
            .iter()
            .enumerate()
            .map(|(index, &label)| (label, VariableId::create_from_index(index)))
            .collect::<HashMap<_, _>>();

        let mut neighbours: KeyedVec<VariableId, Vec<VariableId>> =
            KeyedVec::filled(labels.len(), Vec::new());
        for &(u, v) in self.edges.iter() {
            let u = ids_by_label[&u];
            let v = ids_by_label[&v];
            neighbours[u].push(v);
            neighbours[v].push(u);
        }
        for variable in neighbours.keys().collect::<Vec<_>>() {
            neighbours[variable].sort_unstable();
        }

        let graph = ConstraintGraph {
            labels: labels.into(),
            neighbours,
            ids_by_label,
            num_edges: self.edges.len(),
        };

        colouring_assert_advanced!(
            graph.is_symmetric_and_irreflexive(),
            "The adjacency of a constraint graph should be symmetric and irreflexive"
        );
        debug!(
            "Built constraint graph with {} variables and {} edges",
            graph.num_variables(),
            graph.num_edges()
        );

        graph
    }
}

/// The immutable undirected adjacency model of a graph colouring instance.
///
/// Every vertex is a variable of the constraint satisfaction problem and every edge is an
/// inequality constraint between its endpoints. Variables are numbered in ascending label order
/// and every neighbourhood is sorted, so all iteration over the graph is deterministic.
#[derive(Clone, Debug)]
pub struct ConstraintGraph {
    labels: KeyedVec<VariableId, i32>,
    neighbours: KeyedVec<VariableId, Vec<VariableId>>,
    ids_by_label: HashMap<i32, VariableId>,
    num_edges: usize,
}

impl ConstraintGraph {
    /// Builds a graph from an edge list; every endpoint becomes a variable.
    pub fn from_edges(
        edges: impl IntoIterator<Item = (i32, i32)>,
    ) -> Result<ConstraintGraph, SelfLoop> {
        let mut builder = ConstraintGraphBuilder::new();
        for (u, v) in edges {
            let _ = builder.add_edge(u, v)?;
        }
        Ok(builder.build())
    }

    pub fn num_variables(&self) -> usize {
        self.labels.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Iterates over all variables in ascending order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.labels.keys()
    }

    /// The neighbours of `variable`, in ascending order; empty for an isolated vertex.
    pub fn neighbours(&self, variable: VariableId) -> &[VariableId] {
        &self.neighbours[variable]
    }

    pub fn degree(&self, variable: VariableId) -> usize {
        self.neighbours[variable].len()
    }

    pub fn are_adjacent(&self, u: VariableId, v: VariableId) -> bool {
        self.neighbours[u].binary_search(&v).is_ok()
    }

    /// The label under which `variable` appeared in the input.
    pub fn label(&self, variable: VariableId) -> i32 {
        self.labels[variable]
    }

    pub fn variable_with_label(&self, label: i32) -> Option<VariableId> {
        self.ids_by_label.get(&label).copied()
    }

    /// Iterates over every undirected edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.neighbours.entries().flat_map(|(u, neighbours)| {
            neighbours
                .iter()
                .filter(move |&&v| u < v)
                .map(move |&v| (u, v))
        })
    }

    fn is_symmetric_and_irreflexive(&self) -> bool {
        self.neighbours.entries().all(|(u, neighbours)| {
            neighbours
                .iter()
                .all(|&v| v != u && self.neighbours[v].binary_search(&u).is_ok())
        })
    }
}
