//! Property-based tests for the tableau solver
//!
//! Random feasible problems (every right-hand side non-negative) must
//! either reach a certified optimum or terminate with an explicit
//! unbounded/iteration-limit error.

use pivotab_solver::{
    PivotRecord, Problem, SolveError, SolveObserver, Solver, TableauSnapshot,
};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

/// Strategy for small objective and constraint coefficients
fn coeff() -> impl Strategy<Value = f64> {
    (-10i32..=10).prop_map(f64::from)
}

/// Strategy for non-negative right-hand sides, keeping the all-slack
/// starting basis feasible
fn rhs() -> impl Strategy<Value = f64> {
    (0i32..=20).prop_map(f64::from)
}

fn problem() -> impl Strategy<Value = Problem> {
    (1usize..=3, 1usize..=3).prop_flat_map(|(n, m)| {
        (
            prop::collection::vec(coeff(), n),
            prop::collection::vec((prop::collection::vec(coeff(), n), rhs()), m),
        )
            .prop_map(|(objective, rows)| {
                let mut problem = Problem::new(objective);
                for (coefficients, rhs) in rows {
                    problem.add_constraint(coefficients, rhs);
                }
                problem
            })
    })
}

/// Collects snapshots for invariant checks
#[derive(Default)]
struct Recorder {
    snapshots: Vec<TableauSnapshot>,
    pivots: Vec<PivotRecord>,
}

impl SolveObserver for Recorder {
    fn tableau(&mut self, snapshot: &TableauSnapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn pivot(&mut self, record: &PivotRecord) {
        self.pivots.push(record.clone());
    }
}

proptest! {
    /// An optimum satisfies every constraint, keeps every variable
    /// non-negative and reports exactly c'x.
    #[test]
    fn optimum_is_feasible_and_consistent(problem in problem()) {
        match Solver::new().solve(&problem) {
            Ok(solution) => {
                for value in &solution.values {
                    prop_assert!(*value >= -EPS, "negative variable {value}");
                }
                for constraint in &problem.constraints {
                    let lhs: f64 = constraint
                        .coefficients
                        .iter()
                        .zip(&solution.values)
                        .map(|(a, x)| a * x)
                        .sum();
                    prop_assert!(lhs <= constraint.rhs + EPS, "violated: {lhs} > {}", constraint.rhs);
                }
                let objective: f64 = problem
                    .objective
                    .iter()
                    .zip(&solution.values)
                    .map(|(c, x)| c * x)
                    .sum();
                prop_assert!((objective - solution.objective_value).abs() < EPS);
            }
            // acceptable terminal outcomes for unbounded or degenerate input
            Err(SolveError::Unbounded { .. }) | Err(SolveError::IterationLimit(_)) => {}
            Err(error) => prop_assert!(false, "unexpected error: {error}"),
        }
    }

    /// Every snapshot stays in canonical form: each basis column is a unit
    /// column of its row.
    #[test]
    fn snapshots_stay_in_canonical_form(problem in problem()) {
        let mut recorder = Recorder::default();
        let _ = Solver::new().solve_with(&problem, &mut recorder);

        for snapshot in &recorder.snapshots {
            for (i, &basic) in snapshot.basis.iter().enumerate() {
                for (j, row) in snapshot.rows.iter().enumerate() {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    prop_assert!(
                        (row.coefficients[basic] - expected).abs() < EPS,
                        "column {basic} reads {} in row {j}",
                        row.coefficients[basic]
                    );
                }
            }
        }
    }

    /// The objective value at the basis never decreases across iterations,
    /// and at an optimum the final delta row certifies it.
    #[test]
    fn objective_climbs_to_a_certified_optimum(problem in problem()) {
        let mut recorder = Recorder::default();
        let result = Solver::new().solve_with(&problem, &mut recorder);

        let values: Vec<f64> = recorder
            .snapshots
            .iter()
            .filter_map(|snapshot| snapshot.objective_value())
            .collect();
        for pair in values.windows(2) {
            prop_assert!(pair[1] >= pair[0] - EPS, "objective dropped: {pair:?}");
        }

        if result.is_ok() {
            let last = recorder.snapshots.last().unwrap();
            let deltas = last.deltas.as_ref().unwrap();
            for delta in &deltas[..last.width()] {
                prop_assert!(*delta <= EPS, "positive delta {delta} at optimum");
            }
        }
    }

    /// The chosen leaving row always carries the smallest non-negative
    /// ratio among rows with a strictly positive entering coefficient.
    #[test]
    fn pivots_obey_the_minimum_ratio_rule(problem in problem()) {
        let mut recorder = Recorder::default();
        let _ = Solver::new().solve_with(&problem, &mut recorder);

        // snapshots[0] has no deltas; snapshot k+1 is the table pivot k acted on
        for (record, snapshot) in recorder.pivots.iter().zip(&recorder.snapshots[1..]) {
            let mut best: Option<f64> = None;
            for row in &snapshot.rows {
                let a = row.coefficients[record.entering];
                if a <= 1e-9 {
                    continue;
                }
                let ratio = row.rhs / a;
                if ratio >= 0.0 && best.is_none_or(|min| ratio < min) {
                    best = Some(ratio);
                }
            }
            prop_assert!(
                best.is_some_and(|min| (min - record.ratio).abs() < EPS),
                "ratio {} is not the minimum {best:?}",
                record.ratio
            );
        }
    }

    /// A zero objective is optimal immediately, with no pivots.
    #[test]
    fn zero_objective_terminates_at_the_origin(
        n in 1usize..=3,
        rows in prop::collection::vec((prop::collection::vec(coeff(), 3), rhs()), 1..=3),
    ) {
        let mut problem = Problem::new(vec![0.0; n]);
        for (coefficients, rhs) in rows {
            problem.add_constraint(coefficients[..n].to_vec(), rhs);
        }

        let solution = Solver::new().solve(&problem).unwrap();
        prop_assert_eq!(solution.iterations, 0);
        prop_assert_eq!(solution.objective_value, 0.0);
    }
}
