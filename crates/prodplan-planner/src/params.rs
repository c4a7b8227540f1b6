use thiserror::Error;

/// Inputs to a planning run: per-period demand plus the cost and capacity
/// rates that hold for every period.
///
/// The horizon length is the length of `demand`. Demand is unsigned, so
/// negative order quantities are unrepresentable; the remaining invariants
/// (at least one period, non-negative finite rates) are checked by
/// [`PlanningParameters::validate`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningParameters {
    /// Units ordered per period
    pub demand: Vec<u32>,
    /// Unit cost of production at regular pace
    pub cost_regular: f64,
    /// Unit cost of carrying one unit of stock for one period
    pub cost_storage: f64,
    /// Unit cost of production via overtime
    pub cost_overtime: f64,
    /// Regular production capacity per period
    pub max_regular: f64,
    /// Overtime production capacity per period
    pub max_overtime: f64,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("planning horizon must contain at least one period")]
    EmptyHorizon,
    #[error("{name} must be a non-negative finite number, got {value}")]
    InvalidRate { name: &'static str, value: String },
}

impl PlanningParameters {
    pub fn new(
        demand: Vec<u32>,
        cost_regular: f64,
        cost_storage: f64,
        cost_overtime: f64,
        max_regular: f64,
        max_overtime: f64,
    ) -> Self {
        Self {
            demand,
            cost_regular,
            cost_storage,
            cost_overtime,
            max_regular,
            max_overtime,
        }
    }

    /// Number of periods in the horizon.
    pub fn horizon(&self) -> usize {
        self.demand.len()
    }

    /// Check the structural invariants before any model is built.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.demand.is_empty() {
            return Err(ParameterError::EmptyHorizon);
        }
        for (name, value) in [
            ("cost_regular", self.cost_regular),
            ("cost_storage", self.cost_storage),
            ("cost_overtime", self.cost_overtime),
            ("max_regular", self.max_regular),
            ("max_overtime", self.max_overtime),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::InvalidRate {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PlanningParameters {
        PlanningParameters::new(vec![80, 180, 135], 50.0, 5.0, 75.0, 150.0, 60.0)
    }

    #[test]
    fn valid_parameters_pass() {
        assert_eq!(base().validate(), Ok(()));
        assert_eq!(base().horizon(), 3);
    }

    #[test]
    fn empty_horizon_is_rejected() {
        let mut params = base();
        params.demand.clear();
        assert_eq!(params.validate(), Err(ParameterError::EmptyHorizon));
    }

    #[test]
    fn negative_cost_is_rejected() {
        let mut params = base();
        params.cost_storage = -1.0;
        assert_eq!(
            params.validate(),
            Err(ParameterError::InvalidRate {
                name: "cost_storage",
                value: "-1".to_string(),
            })
        );
    }

    #[test]
    fn non_finite_capacity_is_rejected() {
        let mut params = base();
        params.max_overtime = f64::NAN;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::InvalidRate {
                name: "max_overtime",
                ..
            })
        ));
    }

    #[test]
    fn zero_rates_are_allowed() {
        let params = PlanningParameters::new(vec![0], 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(params.validate(), Ok(()));
    }
}
