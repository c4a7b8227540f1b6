mod model;
mod solution;
mod solver;

pub use model::{Constraint, ConstraintOp, LpModel};
pub use solution::{Solution, SolveError};
pub use solver::{LpSolver, Microlp};
