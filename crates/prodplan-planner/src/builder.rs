//! Generation of the planning LP from [`PlanningParameters`].
//!
//! Variable ordering, for a horizon of N periods (3N−1 variables total):
//!
//! - `[0, N)`   — regular-pace production per period
//! - `[N, 2N)`  — overtime production per period
//! - `[2N, 3N−1)` — stock carried out of periods `0..N−2`
//!
//! The final period has no stock variable: its balance equation has no
//! outgoing term, so ending inventory is zero by construction and any
//! production beyond final-period demand is infeasible rather than merely
//! penalized.

use prodplan_lp::{ConstraintOp, LpModel};

use crate::params::PlanningParameters;

/// Build the canonical LP for the given parameters.
///
/// Pure and deterministic; rate validation belongs to
/// [`PlanningParameters::validate`], and insufficient capacity is never
/// special-cased — that surfaces as solver-reported infeasibility.
///
/// # Panics
///
/// Panics if the horizon is empty; no variable layout exists for it.
pub fn build_model(params: &PlanningParameters) -> LpModel {
    let n = params.horizon();
    assert!(n >= 1, "planning horizon must contain at least one period");
    let num_vars = 3 * n - 1;

    let mut variables = Vec::with_capacity(num_vars);
    for i in 0..n {
        variables.push(format!("regular_{}", i + 1));
    }
    for i in 0..n {
        variables.push(format!("overtime_{}", i + 1));
    }
    for i in 0..n - 1 {
        variables.push(format!("stock_{}", i + 1));
    }

    let mut model = LpModel::new(variables);

    // Objective: regular and overtime costs over all periods, storage cost
    // over the stock-bearing periods only.
    let mut costs = Vec::with_capacity(num_vars);
    costs.extend(std::iter::repeat_n(params.cost_regular, n));
    costs.extend(std::iter::repeat_n(params.cost_overtime, n));
    costs.extend(std::iter::repeat_n(params.cost_storage, n - 1));
    model.set_objective(costs);

    // Capacity and non-negativity rows for both production modes.
    for i in 0..n {
        let mut row = vec![0.0; num_vars];
        row[i] = 1.0;
        model.add_constraint(
            format!("regular_cap_{}", i + 1),
            row.clone(),
            ConstraintOp::Le,
            params.max_regular,
        );
        model.add_constraint(format!("regular_nonneg_{}", i + 1), row, ConstraintOp::Ge, 0.0);
    }
    for i in 0..n {
        let mut row = vec![0.0; num_vars];
        row[n + i] = 1.0;
        model.add_constraint(
            format!("overtime_cap_{}", i + 1),
            row.clone(),
            ConstraintOp::Le,
            params.max_overtime,
        );
        model.add_constraint(format!("overtime_nonneg_{}", i + 1), row, ConstraintOp::Ge, 0.0);
    }

    // Per-period balance: stock_in + regular + overtime − stock_out = demand.
    // There is no stock before the first period and no stock variable after
    // the last one.
    for i in 0..n {
        let mut row = vec![0.0; num_vars];
        row[i] = 1.0;
        row[n + i] = 1.0;
        if i > 0 {
            row[2 * n + i - 1] = 1.0;
        }
        if i < n - 1 {
            row[2 * n + i] = -1.0;
        }
        model.add_constraint(
            format!("balance_{}", i + 1),
            row,
            ConstraintOp::Eq,
            f64::from(params.demand[i]),
        );
    }

    // Stock cannot go negative in any carrying period.
    for i in 0..n - 1 {
        let mut row = vec![0.0; num_vars];
        row[2 * n + i] = 1.0;
        model.add_constraint(format!("stock_nonneg_{}", i + 1), row, ConstraintOp::Ge, 0.0);
    }

    model
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_period_params() -> PlanningParameters {
        PlanningParameters::new(
            vec![80, 180, 135, 240, 95, 139],
            50.0,
            5.0,
            75.0,
            150.0,
            60.0,
        )
    }

    #[test]
    fn variable_layout_is_three_n_minus_one() {
        let model = build_model(&six_period_params());
        assert_eq!(model.num_variables(), 17);
        assert_eq!(model.variables()[0], "regular_1");
        assert_eq!(model.variables()[6], "overtime_1");
        assert_eq!(model.variables()[12], "stock_1");
        assert_eq!(model.variables()[16], "stock_5");
    }

    #[test]
    fn objective_groups_costs_by_mode() {
        let model = build_model(&six_period_params());
        let obj = model.objective();
        assert_eq!(&obj[0..6], &[50.0; 6]);
        assert_eq!(&obj[6..12], &[75.0; 6]);
        assert_eq!(&obj[12..17], &[5.0; 5]);
    }

    #[test]
    fn row_count_covers_caps_bounds_and_balance() {
        // Per period: regular cap + nonneg, overtime cap + nonneg, balance.
        // Plus one stock nonneg row per carrying period: 6N-1 in total.
        let model = build_model(&six_period_params());
        assert_eq!(model.num_constraints(), 35);
    }

    #[test]
    fn interior_balance_row_links_neighboring_stock() {
        let model = build_model(&six_period_params());
        let row = model
            .constraints()
            .iter()
            .find(|c| c.label == "balance_3")
            .unwrap();

        assert_eq!(row.op, ConstraintOp::Eq);
        assert_eq!(row.rhs, 135.0);
        assert_eq!(row.coefficients[2], 1.0, "regular_3");
        assert_eq!(row.coefficients[8], 1.0, "overtime_3");
        assert_eq!(row.coefficients[13], 1.0, "stock_2 carried in");
        assert_eq!(row.coefficients[14], -1.0, "stock_3 carried out");
    }

    #[test]
    fn first_balance_row_has_no_incoming_stock() {
        let model = build_model(&six_period_params());
        let row = model
            .constraints()
            .iter()
            .find(|c| c.label == "balance_1")
            .unwrap();

        assert_eq!(row.rhs, 80.0);
        // Only regular_1, overtime_1 and -stock_1 participate.
        let nonzero: Vec<usize> = row
            .coefficients
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0.0)
            .map(|(j, _)| j)
            .collect();
        assert_eq!(nonzero, vec![0, 6, 12]);
        assert_eq!(row.coefficients[12], -1.0);
    }

    #[test]
    fn last_balance_row_has_no_outgoing_stock() {
        let model = build_model(&six_period_params());
        let row = model
            .constraints()
            .iter()
            .find(|c| c.label == "balance_6")
            .unwrap();

        let nonzero: Vec<usize> = row
            .coefficients
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0.0)
            .map(|(j, _)| j)
            .collect();
        // regular_6, overtime_6 and stock_5 carried in; nothing carried out.
        assert_eq!(nonzero, vec![5, 11, 16]);
        assert_eq!(row.coefficients[16], 1.0);
    }

    #[test]
    fn single_period_has_no_stock_variables() {
        let params = PlanningParameters::new(vec![170], 50.0, 5.0, 75.0, 150.0, 60.0);
        let model = build_model(&params);

        assert_eq!(model.num_variables(), 2);
        assert_eq!(model.variables(), &["regular_1", "overtime_1"]);
        // 2 caps + 2 nonneg + 1 balance, no stock rows.
        assert_eq!(model.num_constraints(), 5);

        let balance = model
            .constraints()
            .iter()
            .find(|c| c.label == "balance_1")
            .unwrap();
        assert_eq!(balance.coefficients, vec![1.0, 1.0]);
        assert_eq!(balance.rhs, 170.0);
    }

    #[test]
    #[should_panic(expected = "at least one period")]
    fn empty_horizon_panics() {
        let params = PlanningParameters::new(vec![], 50.0, 5.0, 75.0, 150.0, 60.0);
        build_model(&params);
    }

    #[test]
    fn build_is_deterministic() {
        let a = build_model(&six_period_params());
        let b = build_model(&six_period_params());
        assert_eq!(a.variables(), b.variables());
        assert_eq!(a.objective(), b.objective());
        assert_eq!(a.num_constraints(), b.num_constraints());
    }
}
