mod propagation_status;
mod solution;

pub use propagation_status::*;
pub use solution::Solution;

/// A colour taken from the palette `1..=K`.
pub type Colour = u32;
