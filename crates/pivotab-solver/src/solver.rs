use log::debug;
use thiserror::Error;

use crate::problem::{Problem, ProblemError};
use crate::solution::{PivotRecord, Solution, TableauSnapshot};
use crate::tableau::Tableau;

/// Terminal failures of the solve loop
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Problem(#[from] ProblemError),
    /// No constraint limits the entering variable, so the objective grows
    /// without bound along that column.
    #[error("no constraint limits entering column {entering}; the objective is unbounded")]
    Unbounded { entering: usize },
    #[error("no optimum within {0} iterations")]
    IterationLimit(usize),
}

/// Receiver of solve progress: the current table before every pivot and
/// once more at optimality, plus each pivot as it is chosen.
///
/// Implementations are read-only consumers; they get copies of the solver
/// state and cannot influence the solve.
pub trait SolveObserver {
    fn tableau(&mut self, _snapshot: &TableauSnapshot) {}

    fn pivot(&mut self, _record: &PivotRecord) {}
}

/// Observer that discards everything
impl SolveObserver for () {}

/// Tableau simplex driver for problems in standard maximization form.
///
/// The starting basis is the all-slack one, assumed feasible (every
/// right-hand side non-negative). Each iteration recomputes the delta row,
/// enters the column with the largest positive delta and leaves the row
/// with the smallest non-negative ratio, until no delta exceeds the
/// tolerance.
pub struct Solver {
    /// Maximum pivots before giving up
    max_iterations: usize,
    /// Tolerance for floating point comparisons
    tolerance: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: 10000,
            tolerance: 1e-9,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Solve to optimality, discarding intermediate tableaus
    pub fn solve(&self, problem: &Problem) -> Result<Solution, SolveError> {
        self.solve_with(problem, &mut ())
    }

    /// Solve to optimality, reporting every tableau and pivot to `observer`
    pub fn solve_with(
        &self,
        problem: &Problem,
        observer: &mut dyn SolveObserver,
    ) -> Result<Solution, SolveError> {
        let mut tableau = Tableau::new(problem)?;
        observer.tableau(&tableau.snapshot());

        let mut iterations = 0;
        loop {
            tableau.compute_deltas();
            observer.tableau(&tableau.snapshot());

            let (entering, max_delta) = match tableau.entering_column() {
                Some(best) if best.1 > self.tolerance => best,
                // every delta at or below zero: the basis is optimal
                _ => break,
            };

            if iterations == self.max_iterations {
                return Err(SolveError::IterationLimit(self.max_iterations));
            }

            let (leaving_row, ratio) = tableau
                .leaving_row(entering, self.tolerance)
                .ok_or(SolveError::Unbounded { entering })?;

            let record = PivotRecord {
                iteration: iterations + 1,
                entering,
                leaving_row,
                leaving: tableau.basis()[leaving_row],
                ratio,
                pivot_element: tableau.element(leaving_row, entering),
                max_delta,
            };
            debug!(
                "iteration {}: x{} enters with delta {}, x{} leaves row {} at ratio {}",
                record.iteration,
                entering + 1,
                max_delta,
                record.leaving + 1,
                leaving_row,
                ratio
            );
            observer.pivot(&record);

            tableau.pivot(leaving_row, entering);
            iterations += 1;
        }

        let solution = Solution {
            values: tableau.decision_values(),
            objective_value: tableau.objective_value(),
            iterations,
        };
        debug!(
            "optimal after {} iterations, objective {}",
            solution.iterations, solution.objective_value
        );
        Ok(solution)
    }
}
