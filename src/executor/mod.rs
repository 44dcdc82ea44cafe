//! Test execution engine
//!
//! Fan-out/fan-in execution of suite plans plus the grid-backed unit runner.

mod parallel;
mod runner;

pub use parallel::ParallelRunner;
pub use runner::{GridUnitRunner, UnitRunner};
