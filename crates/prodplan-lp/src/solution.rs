use thiserror::Error;

/// An optimal point returned by a solver backend.
///
/// `values` follows the same variable ordering as the model that produced it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Optimal value for each variable, in model ordering
    pub values: Vec<f64>,
    /// Optimal objective value
    pub objective: f64,
}

/// Why a backend could not return an optimal point.
///
/// Infeasibility and unboundedness are structural properties of the model,
/// not transient conditions; callers must not retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    /// No assignment satisfies all constraints simultaneously
    #[error("problem is infeasible")]
    Infeasible,
    /// The objective can be decreased without limit
    #[error("problem is unbounded")]
    Unbounded,
    /// The backend failed for a reason of its own
    #[error("solver backend error: {0}")]
    Backend(String),
}
