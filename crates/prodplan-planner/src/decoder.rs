//! Translation of a solver's raw optimal point back into per-period
//! production records.

use prodplan_lp::Solution;

use crate::params::PlanningParameters;
use crate::plan::MonthlyProduction;

/// Map the solution vector onto per-period records, following the builder's
/// variable ordering.
///
/// The planning LP has integral data and a network-flow balance structure,
/// so optimal vertices are integral; backends still return floats, which are
/// rounded to the nearest unit (never truncated, which would under-report a
/// value like 149.999999 by one). `orders_fulfilled` is echoed from the
/// input, not derived from the solution.
pub fn decode_plan(params: &PlanningParameters, solution: &Solution) -> Vec<MonthlyProduction> {
    let n = params.horizon();

    (0..n)
        .map(|i| MonthlyProduction {
            regular_units: round_units(solution.values[i]),
            overtime_units: round_units(solution.values[n + i]),
            stock_carried: if i < n - 1 {
                round_units(solution.values[2 * n + i])
            } else {
                0
            },
            orders_fulfilled: params.demand[i],
        })
        .collect()
}

/// Nearest-integer rounding with a clamp at zero for negative float noise.
fn round_units(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
