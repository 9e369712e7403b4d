/// The optimum of a solved problem
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Optimal value for each decision variable
    pub values: Vec<f64>,
    /// Maximum of c'x, read from the final delta row
    pub objective_value: f64,
    /// Number of pivots performed
    pub iterations: usize,
}

/// Read-only copy of the simplex table at one point of the solve.
///
/// Row `i` is in canonical form relative to the basis: column `basis[i]`
/// reads 1 in row `i` and 0 in every other row.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TableauSnapshot {
    /// Variable indices: decision variables first, then one slack per row
    pub variables: Vec<usize>,
    /// Objective coefficients, zero-extended over the slack variables
    pub objective: Vec<f64>,
    /// Variable basic in each row
    pub basis: Vec<usize>,
    /// Constraint rows with their right-hand sides
    pub rows: Vec<SnapshotRow>,
    /// Delta row: reduced cost per column, then the running objective
    /// value. Absent until the first delta computation.
    pub deltas: Option<Vec<f64>>,
}

/// One row of a [`TableauSnapshot`]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub coefficients: Vec<f64>,
    pub rhs: f64,
}

impl TableauSnapshot {
    /// Number of decision plus slack variables
    pub fn width(&self) -> usize {
        self.variables.len()
    }

    /// Running objective value, once the delta row has been computed
    pub fn objective_value(&self) -> Option<f64> {
        self.deltas.as_ref().map(|deltas| deltas[self.width()])
    }
}

/// The pivot chosen for one iteration, reported before the row reduction
/// is applied.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRecord {
    /// Iteration number, starting at 1
    pub iteration: usize,
    /// Column entering the basis
    pub entering: usize,
    /// Row whose basic variable leaves the basis
    pub leaving_row: usize,
    /// Variable leaving the basis
    pub leaving: usize,
    /// Winning ratio rhs / coefficient of the leaving row
    pub ratio: f64,
    /// Entering-column coefficient of the leaving row
    pub pivot_element: f64,
    /// Largest delta, the one that selected the entering column
    pub max_delta: f64,
}
