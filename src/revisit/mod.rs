mod calculator;
mod error;
mod grid;
mod planner;
mod tables;
mod types;

pub use calculator::{default_cycle_anchor, RevisitCalculator};
pub use error::RevisitError;
pub use grid::OrbitGrid;
pub use planner::RevisitPlanner;
pub use types::{PassMode, RevisitOutcome};
