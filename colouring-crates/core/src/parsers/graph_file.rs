//! Parser for graph-colouring instances.
//!
//! An instance is a text file with one statement per line:
//! - `colors=K` sets the palette size to `K`, it must occur exactly once;
//! - `u,v` declares an undirected edge between the vertices labelled `u` and `v`;
//! - `u` declares a vertex without any edges.
//!
//! Lines are trimmed before they are interpreted, and blank lines as well as lines starting with
//! `#` are ignored. Line numbers in errors are 1-based.
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::basic_types::Colour;
use crate::engine::ConstraintGraph;
use crate::engine::ConstraintGraphBuilder;

const PALETTE_KEY: &str = "colors";

#[derive(Debug, Error)]
pub enum GraphParseError {
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: '{token}' is not a valid palette size")]
    InvalidPalette { line: usize, token: String },

    #[error("line {line}: the palette size is declared more than once")]
    DuplicatePalette { line: usize },

    #[error("the instance does not declare a palette size ('colors=K')")]
    MissingPalette,

    #[error("line {line}: '{token}' is not a valid vertex label")]
    InvalidVariable { line: usize, token: String },

    #[error("line {line}: '{content}' is neither a palette, an edge, nor a vertex declaration")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: vertex {variable} cannot be adjacent to itself")]
    SelfLoop { line: usize, variable: i32 },
}

/// A parsed graph-colouring instance: the constraint graph and the number of available colours.
#[derive(Debug, Clone)]
pub struct ColouringInstance {
    pub graph: ConstraintGraph,
    pub palette_size: Colour,
}

/// Reads the instance file at `path`.
pub fn read_instance_file(path: impl AsRef<Path>) -> Result<ColouringInstance, GraphParseError> {
    let file = File::open(path)?;
    parse_instance(file)
}

/// Parses an instance from `source`.
///
/// Parsing stops at the first error; no partial instance is returned.
pub fn parse_instance(source: impl Read) -> Result<ColouringInstance, GraphParseError> {
    let reader = BufReader::new(source);

    let mut builder = ConstraintGraphBuilder::new();
    let mut palette_size = None;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            if key.trim() != PALETTE_KEY {
                return Err(GraphParseError::MalformedLine {
                    line: line_number,
                    content: line.to_owned(),
                });
            }

            if palette_size.is_some() {
                return Err(GraphParseError::DuplicatePalette { line: line_number });
            }

            let value = value.trim();
            palette_size = Some(value.parse::<Colour>().map_err(|_| {
                GraphParseError::InvalidPalette {
                    line: line_number,
                    token: value.to_owned(),
                }
            })?);
            continue;
        }

        let tokens = line.split(',').map(str::trim).collect::<Vec<_>>();
        match tokens.as_slice() {
            [vertex] => {
                let vertex = parse_label(vertex, line_number)?;
                let _ = builder.add_vertex(vertex);
            }
            [u, v] => {
                let u = parse_label(u, line_number)?;
                let v = parse_label(v, line_number)?;
                let _ = builder
                    .add_edge(u, v)
                    .map_err(|self_loop| GraphParseError::SelfLoop {
                        line: line_number,
                        variable: self_loop.label,
                    })?;
            }
            _ => {
                return Err(GraphParseError::MalformedLine {
                    line: line_number,
                    content: line.to_owned(),
                })
            }
        }
    }

    let palette_size = palette_size.ok_or(GraphParseError::MissingPalette)?;
    let graph = builder.build();

    debug!(
        "Parsed instance with {} variables, {} edges and {} colours",
        graph.num_variables(),
        graph.num_edges(),
        palette_size
    );

    Ok(ColouringInstance {
        graph,
        palette_size,
    })
}

fn parse_label(token: &str, line: usize) -> Result<i32, GraphParseError> {
    token
        .parse::<i32>()
        .map_err(|_| GraphParseError::InvalidVariable {
            line,
            token: token.to_owned(),
        })
}
