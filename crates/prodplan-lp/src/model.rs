/// A linear program in canonical form: a cost vector to minimize and a list
/// of linear constraint rows, all aligned to a fixed variable ordering.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct LpModel {
    /// Variable names, in the ordering the objective and every constraint
    /// row follow
    variables: Vec<String>,
    /// Objective coefficients, one per variable (always minimized)
    objective: Vec<f64>,
    /// Constraint rows
    constraints: Vec<Constraint>,
}

/// A single linear constraint: `coefficients · vars <relation> rhs`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Label for diagnostics (e.g. "balance_3")
    pub label: String,
    /// Coefficients for each variable, in model ordering
    pub coefficients: Vec<f64>,
    /// Comparison operator
    pub op: ConstraintOp,
    /// Right-hand side value
    pub rhs: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

impl LpModel {
    /// Create a model with the given variables and a zero objective.
    pub fn new(variables: Vec<String>) -> Self {
        let n = variables.len();
        Self {
            variables,
            objective: vec![0.0; n],
            constraints: Vec::new(),
        }
    }

    /// Set the objective coefficients to minimize.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient count does not match the variable count.
    pub fn set_objective(&mut self, coefficients: Vec<f64>) {
        assert_eq!(
            coefficients.len(),
            self.variables.len(),
            "objective length must match variable count"
        );
        self.objective = coefficients;
    }

    /// Append a constraint row.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient count does not match the variable count.
    pub fn add_constraint(
        &mut self,
        label: impl Into<String>,
        coefficients: Vec<f64>,
        op: ConstraintOp,
        rhs: f64,
    ) {
        assert_eq!(
            coefficients.len(),
            self.variables.len(),
            "constraint length must match variable count"
        );
        self.constraints.push(Constraint {
            label: label.into(),
            coefficients,
            op,
            rhs,
        });
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}
