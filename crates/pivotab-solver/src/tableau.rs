use crate::problem::{Problem, ProblemError};
use crate::solution::{SnapshotRow, TableauSnapshot};

/// One row of the simplex table: coefficients plus right-hand side
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Row {
    pub a: Vec<f64>,
    pub b: f64,
}

/// The simplex table, kept in canonical form relative to the current basis.
///
/// Construction augments the problem with one slack variable per constraint,
/// which makes the slack columns an identity block and the all-slack basis
/// the starting point. `pivot` exchanges one basic variable for a non-basic
/// one and restores canonical form.
#[derive(Debug, Clone)]
pub(crate) struct Tableau {
    /// Number of decision variables
    n: usize,
    /// Variable indices: 0..n are decision variables, n..n+m slacks
    variables: Vec<usize>,
    /// Variable basic in each row
    basis: Vec<usize>,
    rows: Vec<Row>,
    /// Objective coefficients, zero-extended over the slacks
    objective: Vec<f64>,
    /// Delta row, absent until the first `compute_deltas` call and
    /// invalidated by every pivot
    deltas: Option<Vec<f64>>,
}

impl Tableau {
    pub fn new(problem: &Problem) -> Result<Self, ProblemError> {
        problem.validate()?;
        let n = problem.num_variables();
        let m = problem.num_constraints();

        let mut objective = problem.objective.clone();
        objective.resize(n + m, 0.0);

        let rows = problem
            .constraints
            .iter()
            .enumerate()
            .map(|(i, constraint)| {
                let mut a = constraint.coefficients.clone();
                a.extend((0..m).map(|j| if i == j { 1.0 } else { 0.0 }));
                Row {
                    a,
                    b: constraint.rhs,
                }
            })
            .collect();

        Ok(Self {
            n,
            variables: (0..n + m).collect(),
            basis: (n..n + m).collect(),
            rows,
            objective,
            deltas: None,
        })
    }

    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    pub fn element(&self, row: usize, column: usize) -> f64 {
        self.rows[row].a[column]
    }

    /// Running objective value c'x under the current basis
    pub fn objective_value(&self) -> f64 {
        self.basis
            .iter()
            .zip(&self.rows)
            .map(|(&basic, row)| self.objective[basic] * row.b)
            .sum()
    }

    /// Recomputes the delta row: the reduced cost `c_j - z_j` for every
    /// variable column, where `z_j` is the basis-weighted column sum, and
    /// the running objective value in the final slot.
    pub fn compute_deltas(&mut self) {
        let width = self.variables.len();
        let mut deltas = Vec::with_capacity(width + 1);
        for i in 0..width {
            let z: f64 = self
                .basis
                .iter()
                .zip(&self.rows)
                .map(|(&basic, row)| self.objective[basic] * row.a[i])
                .sum();
            deltas.push(self.objective[i] - z);
        }
        deltas.push(self.objective_value());
        self.deltas = Some(deltas);
    }

    /// Index and value of the largest delta among the variable columns, the
    /// first occurrence winning ties. `None` before the first
    /// `compute_deltas` call.
    ///
    /// A largest delta at or below zero certifies the current basis optimal.
    pub fn entering_column(&self) -> Option<(usize, f64)> {
        let deltas = self.deltas.as_deref()?;
        let columns = &deltas[..self.variables.len()];
        let mut best = (0, columns[0]);
        for (i, &delta) in columns.iter().enumerate().skip(1) {
            if delta > best.1 {
                best = (i, delta);
            }
        }
        Some(best)
    }

    /// Minimum-ratio rule: among rows whose entering-column coefficient is
    /// strictly positive, the smallest non-negative ratio `b / a` wins, the
    /// first occurrence breaking ties. Rows with a zero or negative
    /// coefficient are never eligible, whatever their right-hand side.
    ///
    /// `None` means no constraint limits the entering variable: the
    /// objective is unbounded along that column.
    pub fn leaving_row(&self, entering: usize, tolerance: f64) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, row) in self.rows.iter().enumerate() {
            if row.a[entering] <= tolerance {
                continue;
            }
            let ratio = row.b / row.a[entering];
            if ratio < 0.0 {
                continue;
            }
            match best {
                Some((_, min_ratio)) if ratio >= min_ratio => {}
                _ => best = Some((i, ratio)),
            }
        }
        best
    }

    /// Brings `column` into the basis at `row`: normalizes the pivot row by
    /// the pivot element, then eliminates the column from every other row,
    /// so that the column reads 1 at `row` and 0 elsewhere.
    pub fn pivot(&mut self, row: usize, column: usize) {
        self.basis[row] = column;

        let pivot = self.rows[row].a[column];
        for value in &mut self.rows[row].a {
            *value /= pivot;
        }
        self.rows[row].b /= pivot;

        for i in 0..self.rows.len() {
            if i == row {
                continue;
            }
            let factor = self.rows[i].a[column];
            if factor == 0.0 {
                continue;
            }
            for j in 0..self.rows[i].a.len() {
                self.rows[i].a[j] -= factor * self.rows[row].a[j];
            }
            self.rows[i].b -= factor * self.rows[row].b;
        }

        // stale after the basis change
        self.deltas = None;
    }

    /// Current value of each decision variable: `b` of the row a variable is
    /// basic in, zero for non-basic variables.
    pub fn decision_values(&self) -> Vec<f64> {
        let mut values = vec![0.0; self.n];
        for (i, &basic) in self.basis.iter().enumerate() {
            if basic < self.n {
                values[basic] = self.rows[i].b;
            }
        }
        values
    }

    pub fn snapshot(&self) -> TableauSnapshot {
        TableauSnapshot {
            variables: self.variables.clone(),
            objective: self.objective.clone(),
            basis: self.basis.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| SnapshotRow {
                    coefficients: row.a.clone(),
                    rhs: row.b,
                })
                .collect(),
            deltas: self.deltas.clone(),
        }
    }
}
