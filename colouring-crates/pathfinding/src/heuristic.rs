use std::fmt::Display;

use crate::Coordinate;

/// The estimate of the remaining distance used to order the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Heuristic {
    /// No estimate at all, which turns the search into uniform-cost search.
    Zero,
    /// The straight-line distance between the grid coordinates.
    Euclidean,
    /// The sum of the absolute coordinate differences.
    Manhattan,
}

impl Heuristic {
    /// All heuristics, in the order in which they are reported by default.
    pub const ALL: [Heuristic; 3] = [Heuristic::Zero, Heuristic::Euclidean, Heuristic::Manhattan];

    /// Estimates the distance from `from` to `to`. If either coordinate is unknown the estimate
    /// is 0.
    pub fn estimate(&self, from: Option<Coordinate>, to: Option<Coordinate>) -> f64 {
        let (Some(from), Some(to)) = (from, to) else {
            return 0.0;
        };

        match self {
            Heuristic::Zero => 0.0,
            Heuristic::Euclidean => from.euclidean_distance(to),
            Heuristic::Manhattan => f64::from(from.manhattan_distance(to)),
        }
    }

    /// The name under which results of this heuristic are reported.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Heuristic::Zero => "UCS (h=0)",
            Heuristic::Euclidean => "A* Euclidean",
            Heuristic::Manhattan => "A* Manhattan",
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mode_name())
    }
}
