use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

use crate::model::{ConstraintOp, LpModel};
use crate::solution::{Solution, SolveError};

/// Minimal solver capability: minimize a model's objective subject to its
/// constraint rows, returning an optimal point or a structural failure.
///
/// Any conforming LP backend can stand behind this trait; the pivoting
/// algorithm is the backend's business.
pub trait LpSolver {
    fn solve(&self, model: &LpModel) -> Result<Solution, SolveError>;
}

/// Default backend: the pure-Rust `microlp` simplex implementation.
///
/// Stateless, so a single instance can serve concurrent solves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Microlp;

impl Microlp {
    pub fn new() -> Self {
        Self
    }
}

impl LpSolver for Microlp {
    fn solve(&self, model: &LpModel) -> Result<Solution, SolveError> {
        let mut problem = Problem::new(OptimizationDirection::Minimize);

        // Variables are registered free; the model carries explicit
        // non-negativity rows where it needs them.
        let vars: Vec<_> = model
            .objective()
            .iter()
            .map(|&cost| problem.add_var(cost, (f64::NEG_INFINITY, f64::INFINITY)))
            .collect();

        for constraint in model.constraints() {
            let mut lhs = LinearExpr::empty();
            for (j, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 {
                    lhs.add(vars[j], coeff);
                }
            }
            let op = match constraint.op {
                ConstraintOp::Le => ComparisonOp::Le,
                ConstraintOp::Ge => ComparisonOp::Ge,
                ConstraintOp::Eq => ComparisonOp::Eq,
            };
            problem.add_constraint(lhs, op, constraint.rhs);
        }

        let raw = problem.solve().map_err(|e| match e {
            microlp::Error::Infeasible => SolveError::Infeasible,
            microlp::Error::Unbounded => SolveError::Unbounded,
            other => SolveError::Backend(other.to_string()),
        })?;

        Ok(Solution {
            values: vars.iter().map(|&v| *raw.var_value(v)).collect(),
            objective: raw.objective(),
        })
    }
}
