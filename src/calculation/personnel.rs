//! Personnel cost aggregation functionality.
//!
//! This module sums the project cost of every resource on the roster. Both
//! freelancers and salaried resources are charged as hourly cost times the
//! hours allocated to the project; the hours already encode the time
//! commitment, so the project duration never multiplies the cost a second
//! time.

use rust_decimal::Decimal;

use crate::config::RatesConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, Resource};

use super::hourly_cost::resolve_hourly_cost;

/// The result of a personnel cost aggregation, including the audit steps.
#[derive(Debug, Clone)]
pub struct PersonnelCostResult {
    /// Total cost of freelance resources.
    pub freelance_cost: Decimal,
    /// Total cost of employees and collaborators.
    pub salaried_cost: Decimal,
    /// The summed personnel cost.
    pub total_cost: Decimal,
    /// The audit steps recording the per-resource resolutions and the
    /// aggregation.
    pub audit_steps: Vec<AuditStep>,
}

/// Aggregates the personnel cost over the roster.
///
/// # Arguments
///
/// * `allocations` - Each resource paired with its resolved project hours
/// * `config` - The rate configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Propagates `InvalidContributionRates` from the per-resource hourly cost
/// resolution.
pub fn personnel_cost(
    allocations: &[(&Resource, Decimal)],
    config: &RatesConfig,
    step_number: u32,
) -> EngineResult<PersonnelCostResult> {
    let mut audit_steps = Vec::new();
    let mut next_step = step_number;

    let mut freelance_cost = Decimal::ZERO;
    let mut salaried_cost = Decimal::ZERO;

    for (resource, hours) in allocations {
        let resolution = resolve_hourly_cost(resource, config, next_step)?;
        next_step += resolution.audit_steps.len() as u32;
        audit_steps.extend(resolution.audit_steps);

        let cost = resolution.hourly_rate * *hours;
        if resource.is_freelancer() {
            freelance_cost += cost;
        } else {
            salaried_cost += cost;
        }

        audit_steps.push(AuditStep {
            step_number: next_step,
            rule_id: "resource_project_cost".to_string(),
            rule_name: "Resource Project Cost".to_string(),
            input: serde_json::json!({
                "resource_id": resource.id,
                "hourly_rate": resolution.hourly_rate.normalize().to_string(),
                "project_hours": hours.normalize().to_string()
            }),
            output: serde_json::json!({
                "cost": cost.normalize().to_string()
            }),
            reasoning: format!(
                "{}/h x {} h = {}",
                resolution.hourly_rate.normalize(),
                hours.normalize(),
                cost.normalize()
            ),
        });
        next_step += 1;
    }

    let total_cost = freelance_cost + salaried_cost;

    audit_steps.push(AuditStep {
        step_number: next_step,
        rule_id: "personnel_cost".to_string(),
        rule_name: "Personnel Cost Aggregation".to_string(),
        input: serde_json::json!({
            "resources": allocations.len(),
            "freelance_cost": freelance_cost.normalize().to_string(),
            "salaried_cost": salaried_cost.normalize().to_string()
        }),
        output: serde_json::json!({
            "personnel_cost": total_cost.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} = {}",
            freelance_cost.normalize(),
            salaried_cost.normalize(),
            total_cost.normalize()
        ),
    });

    Ok(PersonnelCostResult {
        freelance_cost,
        salaried_cost,
        total_cost,
        audit_steps,
    })
}
