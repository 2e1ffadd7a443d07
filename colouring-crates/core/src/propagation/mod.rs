//! Constraint propagation over the inequality constraints of a [`ConstraintGraph`].
//!
//! The only propagator is [`ArcConsistency`], an AC-3 style fixpoint computation driven by a
//! worklist of directed [`Arc`]s.
mod arc;
mod arc_consistency;

pub use arc::Arc;
pub use arc_consistency::*;

#[cfg(doc)]
use crate::ConstraintGraph;
