use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::Coordinate;
use crate::WeightedGraph;

#[derive(Debug, Error)]
pub enum PathfindingParseError {
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: '{token}' is not a valid integer")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}: '{content}' is neither a start, goal, vertex, nor edge declaration")]
    MalformedLine { line: usize, content: String },

    #[error("the instance does not declare a start vertex ('S,<id>')")]
    MissingStart,

    #[error("the instance does not declare a goal vertex ('D,<id>')")]
    MissingGoal,

    #[error("line {line}: edge weight {weight} is negative")]
    NegativeWeight { line: usize, weight: i64 },
}

/// A parsed shortest-path instance.
#[derive(Clone, Debug)]
pub struct PathfindingInstance {
    pub graph: WeightedGraph,
    pub start: i32,
    pub goal: i32,
}

pub fn read_pathfinding_file(
    path: impl AsRef<Path>,
) -> Result<PathfindingInstance, PathfindingParseError> {
    let file = File::open(path)?;
    parse_pathfinding_instance(file)
}

/// Parses a shortest-path instance with one declaration per line:
/// - `S,<id>` the start vertex and `D,<id>` the goal vertex; a later declaration replaces an
///   earlier one;
/// - `<id>,<cell>` a vertex at the coordinate packed in `cell`;
/// - `<u>,<v>,<w>` an undirected edge of non-negative weight `w`.
///
/// Lines are trimmed, and blank lines as well as lines starting with `#` are ignored.
pub fn parse_pathfinding_instance(
    source: impl Read,
) -> Result<PathfindingInstance, PathfindingParseError> {
    let reader = BufReader::new(source);

    let mut graph = WeightedGraph::new();
    let mut start = None;
    let mut goal = None;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens = line.split(',').map(str::trim).collect::<Vec<_>>();
        match tokens.as_slice() {
            ["S", vertex] => start = Some(parse_integer(vertex, line_number)?),
            ["D", vertex] => goal = Some(parse_integer(vertex, line_number)?),
            [vertex, cell] => {
                let vertex = parse_integer(vertex, line_number)?;
                let cell = parse_integer(cell, line_number)?;
                graph.add_vertex(vertex, Coordinate::from_cell(cell));
            }
            [u, v, weight] => {
                let u = parse_integer(u, line_number)?;
                let v = parse_integer(v, line_number)?;
                let weight = parse_weight(weight, line_number)?;
                graph.add_edge(u, v, weight);
            }
            _ => {
                return Err(PathfindingParseError::MalformedLine {
                    line: line_number,
                    content: line.to_owned(),
                })
            }
        }
    }

    let start = start.ok_or(PathfindingParseError::MissingStart)?;
    let goal = goal.ok_or(PathfindingParseError::MissingGoal)?;

    debug!(
        "Parsed pathfinding instance with {} vertices, from {start} to {goal}",
        graph.num_vertices()
    );

    Ok(PathfindingInstance { graph, start, goal })
}

fn parse_integer(token: &str, line: usize) -> Result<i32, PathfindingParseError> {
    token
        .parse()
        .map_err(|_| PathfindingParseError::InvalidInteger {
            line,
            token: token.to_owned(),
        })
}

fn parse_weight(token: &str, line: usize) -> Result<u32, PathfindingParseError> {
    let invalid = || PathfindingParseError::InvalidInteger {
        line,
        token: token.to_owned(),
    };

    let weight = token.parse::<i64>().map_err(|_| invalid())?;
    if weight < 0 {
        return Err(PathfindingParseError::NegativeWeight { line, weight });
    }

    u32::try_from(weight).map_err(|_| invalid())
}
