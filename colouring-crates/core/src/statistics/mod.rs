//! Contains functions which configure the logging of statistics and allow the logging of
//! statistics themselves.
mod statistic_logging;

pub use statistic_logging::*;
