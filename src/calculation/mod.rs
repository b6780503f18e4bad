//! Calculation logic for the quote engine.
//!
//! This module contains all the calculation functions for pricing a
//! consulting project, including gross salary estimation from net pay,
//! monthly employer cost with social loadings, hourly cost resolution for
//! salaried and freelance resources, full-time project-hours defaulting,
//! overhead allocation over billable capacity, personnel cost aggregation,
//! cost-plus pricing with IRAP and VAT, and the quote orchestration that
//! ties everything together.

mod employer_cost;
mod gross_salary;
mod hourly_cost;
mod overhead;
mod personnel;
mod pricing;
mod project_hours;
mod quote;

pub use employer_cost::{EmployerCostResult, monthly_employer_cost};
pub use gross_salary::{GrossSalaryResult, estimate_gross_salary};
pub use hourly_cost::{HourlyCostResult, resolve_hourly_cost};
pub use overhead::{
    OverheadAllocationResult, allocate_overhead, monthly_overhead_schedule,
    total_annual_fixed_costs,
};
pub use personnel::{PersonnelCostResult, personnel_cost};
pub use pricing::{PricingResult, price_from_cost};
pub use project_hours::{full_time_hours, resolve_project_hours};
pub use quote::calculate_quote;
