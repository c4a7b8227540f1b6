//! The solve pipeline: validate → build model → backend solve → decode.

use prodplan_lp::{LpSolver, Microlp, SolveError};
use thiserror::Error;

use crate::builder::build_model;
use crate::decoder::decode_plan;
use crate::params::{ParameterError, PlanningParameters};
use crate::plan::ProductionPlan;

/// A planning run failure. Invalid input, infeasibility, and unboundedness
/// are deliberately distinct: the first is caught before any model is built,
/// the second is a property of the demand/capacity data, and the third would
/// mean the formulation itself is broken.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error(transparent)]
    InvalidParameters(#[from] ParameterError),
    #[error("no production plan can satisfy demand within the capacity limits")]
    Infeasible,
    #[error("planning model is unbounded; formulation defect")]
    Unbounded,
    #[error("solver backend failed: {0}")]
    Solver(String),
}

/// Solve a planning run with the default backend.
pub fn solve(params: &PlanningParameters) -> Result<ProductionPlan, PlanError> {
    solve_with(params, &Microlp::new())
}

/// Solve a planning run with any conforming LP backend.
///
/// Each call is an independent pipeline with no shared state; concurrent
/// calls only require the backend itself to be reentrant.
pub fn solve_with(
    params: &PlanningParameters,
    solver: &impl LpSolver,
) -> Result<ProductionPlan, PlanError> {
    params.validate()?;

    let model = build_model(params);
    let solution = solver.solve(&model).map_err(|e| match e {
        SolveError::Infeasible => PlanError::Infeasible,
        SolveError::Unbounded => PlanError::Unbounded,
        SolveError::Backend(msg) => PlanError::Solver(msg),
    })?;

    let periods = decode_plan(params, &solution);
    // Integral inputs make the optimum integral; rounding (not a truncating
    // cast) keeps float noise from under-reporting the cost by one unit.
    let total_cost = solution.objective.round().max(0.0) as u64;

    Ok(ProductionPlan {
        periods,
        total_cost,
    })
}
