use thiserror::Error;

/// A linear program in standard maximization form:
/// maximize c'x subject to Ax <= b, x >= 0.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Objective coefficients, one per decision variable
    pub objective: Vec<f64>,
    /// Constraint rows, all of the form a'x <= rhs
    pub constraints: Vec<Constraint>,
}

/// A single `<=` constraint row
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Coefficients for each decision variable
    pub coefficients: Vec<f64>,
    /// Right-hand side value
    pub rhs: f64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("objective has no coefficients")]
    NoVariables,
    #[error("problem has no constraints")]
    NoConstraints,
    #[error("constraint {index} has {found} coefficients, expected {expected}")]
    CoefficientCount {
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl Problem {
    pub fn new(objective: Vec<f64>) -> Self {
        Self {
            objective,
            constraints: Vec::new(),
        }
    }

    pub fn add_constraint(&mut self, coefficients: Vec<f64>, rhs: f64) {
        self.constraints.push(Constraint { coefficients, rhs });
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Checks the problem shape: at least one variable, at least one
    /// constraint, and every constraint row as wide as the objective.
    ///
    /// Feasibility of the all-slack starting basis (every rhs >= 0) is the
    /// caller's responsibility and is not checked here.
    pub fn validate(&self) -> Result<(), ProblemError> {
        let expected = self.num_variables();
        if expected == 0 {
            return Err(ProblemError::NoVariables);
        }
        if self.constraints.is_empty() {
            return Err(ProblemError::NoConstraints);
        }
        for (index, constraint) in self.constraints.iter().enumerate() {
            let found = constraint.coefficients.len();
            if found != expected {
                return Err(ProblemError::CoefficientCount {
                    index,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}
