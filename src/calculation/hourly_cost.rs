//! Hourly cost resolution functionality.
//!
//! This module resolves the hourly cost of any resource on the roster. For
//! freelancers the invoicing basis is used (hourly rate verbatim, or the
//! monthly compensation spread over the monthly billable capacity); for
//! salaried resources the full monthly employer cost is spread over the same
//! capacity.

use rust_decimal::Decimal;

use crate::config::RatesConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, Engagement, FreelanceBasis, Resource};

use super::employer_cost::monthly_employer_cost;

/// The number of months used to convert annual billable hours to monthly.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of an hourly cost resolution, including the audit steps.
#[derive(Debug, Clone)]
pub struct HourlyCostResult {
    /// The resolved hourly cost.
    pub hourly_rate: Decimal,
    /// The audit steps recording this resolution.
    pub audit_steps: Vec<AuditStep>,
}

/// Resolves the hourly cost of a resource.
///
/// - Freelancer with an hourly rate: the rate, verbatim.
/// - Freelancer with a monthly compensation: `compensation / (annual_billable_hours / 12)`.
/// - Employee or collaborator: `monthly_employer_cost / (annual_billable_hours / 12)`.
///
/// A resource with zero annual billable hours resolves to a zero hourly
/// cost rather than a division by zero, except for the verbatim hourly rate
/// which needs no capacity to be meaningful.
///
/// # Arguments
///
/// * `resource` - The resource to resolve
/// * `config` - The rate configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Propagates `InvalidContributionRates` from the employer cost calculation.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::resolve_hourly_cost;
/// use quote_engine::config::RatesConfig;
/// use quote_engine::models::{Engagement, FreelanceBasis, Resource};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let freelancer = Resource {
///     id: "res_001".to_string(),
///     name: "Ada".to_string(),
///     engagement: Engagement::Freelancer {
///         pay: FreelanceBasis::HourlyRate(Decimal::from_str("50").unwrap()),
///         vat_rate: None,
///     },
///     annual_billable_hours: Decimal::from_str("1320").unwrap(),
///     project_hours: None,
///     income_tax_rate: None,
///     contribution_rate: None,
/// };
///
/// let result = resolve_hourly_cost(&freelancer, &RatesConfig::default(), 1).unwrap();
/// assert_eq!(result.hourly_rate, Decimal::from_str("50").unwrap());
/// ```
pub fn resolve_hourly_cost(
    resource: &Resource,
    config: &RatesConfig,
    step_number: u32,
) -> EngineResult<HourlyCostResult> {
    let monthly_hours = resource.annual_billable_hours / MONTHS_PER_YEAR;

    match &resource.engagement {
        Engagement::Freelancer { pay, .. } => {
            let (hourly_rate, basis, reasoning) = match pay {
                FreelanceBasis::HourlyRate(rate) => (
                    *rate,
                    "hourly_rate",
                    format!("Invoicing rate {} used verbatim", rate.normalize()),
                ),
                FreelanceBasis::MonthlyCompensation(compensation) => {
                    if monthly_hours.is_zero() {
                        (
                            Decimal::ZERO,
                            "monthly_compensation",
                            "Zero billable capacity, hourly cost degrades to 0".to_string(),
                        )
                    } else {
                        let rate = *compensation / monthly_hours;
                        (
                            rate,
                            "monthly_compensation",
                            format!(
                                "{} / {} = {}",
                                compensation.normalize(),
                                monthly_hours.normalize(),
                                rate.normalize()
                            ),
                        )
                    }
                }
            };

            let audit_step = AuditStep {
                step_number,
                rule_id: "hourly_cost".to_string(),
                rule_name: "Hourly Cost Resolution".to_string(),
                input: serde_json::json!({
                    "resource_id": resource.id,
                    "contract": "freelancer",
                    "basis": basis,
                    "monthly_billable_hours": monthly_hours.normalize().to_string()
                }),
                output: serde_json::json!({
                    "hourly_rate": hourly_rate.normalize().to_string()
                }),
                reasoning,
            };

            Ok(HourlyCostResult {
                hourly_rate,
                audit_steps: vec![audit_step],
            })
        }
        Engagement::Employee { pay } | Engagement::Collaborator { pay } => {
            let employer = monthly_employer_cost(resource, pay, config, step_number)?;
            let mut audit_steps = employer.audit_steps;
            let next_step = step_number + audit_steps.len() as u32;

            let (hourly_rate, reasoning) = if monthly_hours.is_zero() {
                (
                    Decimal::ZERO,
                    "Zero billable capacity, hourly cost degrades to 0".to_string(),
                )
            } else {
                let rate = employer.monthly_cost / monthly_hours;
                (
                    rate,
                    format!(
                        "{} / {} = {}",
                        employer.monthly_cost.normalize(),
                        monthly_hours.normalize(),
                        rate.normalize()
                    ),
                )
            };

            audit_steps.push(AuditStep {
                step_number: next_step,
                rule_id: "hourly_cost".to_string(),
                rule_name: "Hourly Cost Resolution".to_string(),
                input: serde_json::json!({
                    "resource_id": resource.id,
                    "contract": "salaried",
                    "monthly_employer_cost": employer.monthly_cost.normalize().to_string(),
                    "monthly_billable_hours": monthly_hours.normalize().to_string()
                }),
                output: serde_json::json!({
                    "hourly_rate": hourly_rate.normalize().to_string()
                }),
                reasoning,
            });

            Ok(HourlyCostResult {
                hourly_rate,
                audit_steps,
            })
        }
    }
}
