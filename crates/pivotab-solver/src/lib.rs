mod problem;
mod solution;
mod solver;
mod tableau;

pub use problem::{Constraint, Problem, ProblemError};
pub use solution::{PivotRecord, SnapshotRow, Solution, TableauSnapshot};
pub use solver::{SolveError, SolveObserver, Solver};
