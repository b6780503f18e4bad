//! Overhead allocation functionality.
//!
//! This module allocates the company's fixed annual costs to the active
//! project. The allocation is hours-driven: the annual fixed costs are
//! spread over the roster's annual billable capacity to obtain an hourly
//! overhead rate, which is then applied to the hours actually allocated to
//! the project. A resource working fewer hours therefore drags in
//! proportionally less overhead, regardless of how long the project runs.
//!
//! A separate, display-only monthly schedule replicates the monthly
//! fixed-cost figure over every calendar month spanned by the projects in
//! the plan. The schedule is informational and is never used to derive the
//! overhead charge.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{AuditStep, FixedCosts, ProjectData};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of an overhead allocation, including the audit step.
#[derive(Debug, Clone)]
pub struct OverheadAllocationResult {
    /// The hourly overhead rate derived from the roster capacity.
    pub hourly_rate: Decimal,
    /// The overhead charged to the active project.
    pub overhead_cost: Decimal,
    /// The audit step recording this allocation.
    pub audit_step: AuditStep,
}

/// Sums the annual fixed-cost categories.
///
/// The free-text `other_description` field is not a cost and is excluded;
/// everything else is summed.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::total_annual_fixed_costs;
/// use quote_engine::models::FixedCosts;
/// use rust_decimal::Decimal;
///
/// let costs = FixedCosts {
///     rent: Decimal::new(12000, 0),
///     software: Decimal::new(3600, 0),
///     other_description: "not a number".to_string(),
///     ..FixedCosts::default()
/// };
/// assert_eq!(total_annual_fixed_costs(&costs), Decimal::new(15600, 0));
/// ```
pub fn total_annual_fixed_costs(fixed_costs: &FixedCosts) -> Decimal {
    fixed_costs.rent
        + fixed_costs.utilities
        + fixed_costs.software
        + fixed_costs.hardware
        + fixed_costs.marketing
        + fixed_costs.administration
        + fixed_costs.insurance
        + fixed_costs.travel
        + fixed_costs.training
        + fixed_costs.other
}

/// Allocates overhead to the active project.
///
/// The hourly overhead rate is the annual fixed-cost total divided by the
/// summed annual billable hours of every resource on the roster; a roster
/// with zero capacity yields a zero rate rather than a division by zero.
/// The project is charged the rate times the total hours allocated to it.
///
/// # Arguments
///
/// * `fixed_costs` - The annual fixed costs
/// * `total_billable_hours` - Summed annual billable hours of the roster
/// * `project_hours` - Summed resolved project hours of the roster
/// * `step_number` - The step number for audit trail sequencing
pub fn allocate_overhead(
    fixed_costs: &FixedCosts,
    total_billable_hours: Decimal,
    project_hours: Decimal,
    step_number: u32,
) -> OverheadAllocationResult {
    let annual_fixed_costs = total_annual_fixed_costs(fixed_costs);

    let hourly_rate = if total_billable_hours.is_zero() {
        Decimal::ZERO
    } else {
        annual_fixed_costs / total_billable_hours
    };

    let overhead_cost = hourly_rate * project_hours;

    let reasoning = if total_billable_hours.is_zero() {
        "Roster has no billable capacity, overhead rate degrades to 0".to_string()
    } else {
        format!(
            "{} / {} = {}/h; {}/h x {} h = {}",
            annual_fixed_costs.normalize(),
            total_billable_hours.normalize(),
            hourly_rate.normalize(),
            hourly_rate.normalize(),
            project_hours.normalize(),
            overhead_cost.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overhead_allocation".to_string(),
        rule_name: "Overhead Allocation".to_string(),
        input: serde_json::json!({
            "annual_fixed_costs": annual_fixed_costs.normalize().to_string(),
            "total_billable_hours": total_billable_hours.normalize().to_string(),
            "project_hours": project_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_overhead_rate": hourly_rate.normalize().to_string(),
            "overhead_cost": overhead_cost.normalize().to_string()
        }),
        reasoning,
    };

    OverheadAllocationResult {
        hourly_rate,
        overhead_cost,
        audit_step,
    }
}

/// Builds the display-only monthly overhead schedule.
///
/// Each project occupies calendar months `0 .. ceil(duration_months)`; the
/// months of all projects are unioned, deduplicated, and sorted ascending,
/// and each month carries one twelfth of the annual fixed costs. The
/// schedule is not reconciled with the hours-driven overhead charge.
pub fn monthly_overhead_schedule(
    fixed_costs: &FixedCosts,
    projects: &[ProjectData],
) -> Vec<Decimal> {
    let monthly_fixed_costs = total_annual_fixed_costs(fixed_costs) / MONTHS_PER_YEAR;

    let mut months = BTreeSet::new();
    for project in projects {
        let end_month = project.duration_months.ceil().to_i64().unwrap_or(0).max(0);
        for month in 0..end_month {
            months.insert(month);
        }
    }

    months.iter().map(|_| monthly_fixed_costs).collect()
}
