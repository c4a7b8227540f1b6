pub mod builder;
pub mod decoder;
pub mod params;
pub mod plan;
pub mod solve;

pub use builder::build_model;
pub use decoder::decode_plan;
pub use params::{ParameterError, PlanningParameters};
pub use plan::{MonthlyProduction, ProductionPlan};
pub use solve::{PlanError, solve, solve_with};
