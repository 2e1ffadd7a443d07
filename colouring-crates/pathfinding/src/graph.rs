use std::fmt::Display;
use std::hash::BuildHasherDefault;

use fnv::FnvHasher;

pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// A cell on the unit grid. Instance files pack a coordinate into one integer as `x * 10 + y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Unpacks a cell number `x * 10 + y`.
    pub fn from_cell(cell: i32) -> Self {
        Coordinate {
            x: cell / 10,
            y: cell % 10,
        }
    }

    pub fn euclidean_distance(&self, other: Coordinate) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    pub fn manhattan_distance(&self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightedEdge {
    pub to: i32,
    pub weight: u32,
}

/// An undirected graph with non-negative integer edge weights, where vertices may carry a
/// [`Coordinate`].
///
/// Edges are kept in insertion order per vertex, which fixes the order in which neighbours are
/// relaxed during search. Parallel edges are kept.
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    adjacency: HashMap<i32, Vec<WeightedEdge>>,
    coordinates: HashMap<i32, Coordinate>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `vertex`, placing it at `coordinate`. A later declaration of the same vertex
    /// replaces its coordinate.
    pub fn add_vertex(&mut self, vertex: i32, coordinate: Coordinate) {
        let _ = self.coordinates.insert(vertex, coordinate);
        let _ = self.adjacency.entry(vertex).or_default();
    }

    pub fn add_edge(&mut self, u: i32, v: i32, weight: u32) {
        self.adjacency
            .entry(u)
            .or_default()
            .push(WeightedEdge { to: v, weight });
        self.adjacency
            .entry(v)
            .or_default()
            .push(WeightedEdge { to: u, weight });
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains_vertex(&self, vertex: i32) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Returns the edges leaving `vertex`; an unknown vertex has none.
    pub fn edges_of(&self, vertex: i32) -> &[WeightedEdge] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn coordinate_of(&self, vertex: i32) -> Option<Coordinate> {
        self.coordinates.get(&vertex).copied()
    }
}
