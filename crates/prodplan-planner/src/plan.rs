/// Production decisions for one period of the horizon.
///
/// Constructed once per solve by the decoder and immutable afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyProduction {
    /// Units built at regular pace
    pub regular_units: u32,
    /// Units built via overtime
    pub overtime_units: u32,
    /// Units carried out of this period into the next (0 for the final
    /// period by construction)
    pub stock_carried: u32,
    /// Demand for this period, echoed from the input for reporting
    pub orders_fulfilled: u32,
}

/// The decoded result of a planning run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionPlan {
    /// One entry per period, in horizon order
    pub periods: Vec<MonthlyProduction>,
    /// Optimal total cost, rounded to the nearest whole unit
    pub total_cost: u64,
}

impl ProductionPlan {
    /// Total units produced across the horizon, both production modes.
    pub fn total_produced(&self) -> u64 {
        self.periods
            .iter()
            .map(|p| u64::from(p.regular_units) + u64::from(p.overtime_units))
            .sum()
    }
}
