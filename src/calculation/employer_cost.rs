//! Employer cost calculation functionality.
//!
//! This module computes the full monthly cost of a salaried resource
//! (employee or collaborator) for the company: the gross salary plus the
//! employer-side loadings for social contributions (INPS), workplace-injury
//! insurance (INAIL), and statutory severance accrual (TFR).

use rust_decimal::Decimal;

use crate::config::RatesConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, Resource, SalaryBasis};

use super::gross_salary::estimate_gross_salary;

/// The result of an employer cost calculation, including the audit steps.
#[derive(Debug, Clone)]
pub struct EmployerCostResult {
    /// The full monthly cost of the resource for the company.
    pub monthly_cost: Decimal,
    /// The audit steps recording this calculation. Two steps when the gross
    /// salary had to be estimated from net, one otherwise.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the full monthly employer cost for a salaried resource.
///
/// A gross salary basis is used as-is; a net salary basis is grossed up
/// first, using the resource's own income-tax and contribution rates when
/// present and the configured defaults otherwise. The employer loadings are
/// then applied multiplicatively:
///
/// ```text
/// employer_cost = gross * (1 + (inps + inail + tfr) / 100)
/// ```
///
/// With the default loadings (24 + 1 + 7.41) the multiplier is 1.3241.
///
/// # Arguments
///
/// * `resource` - The resource the basis belongs to (consulted for rate
///   overrides)
/// * `basis` - The salary basis of the resource
/// * `config` - The rate configuration carrying defaults and loadings
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Propagates `InvalidContributionRates` from the gross-up when the
/// resource's override rates are inconsistent.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::monthly_employer_cost;
/// use quote_engine::config::RatesConfig;
/// use quote_engine::models::{Engagement, Resource, SalaryBasis};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let basis = SalaryBasis::GrossMonthly(Decimal::from_str("3125").unwrap());
/// let resource = Resource {
///     id: "res_001".to_string(),
///     name: "Mario".to_string(),
///     engagement: Engagement::Employee { pay: basis },
///     annual_billable_hours: Decimal::from_str("1320").unwrap(),
///     project_hours: None,
///     income_tax_rate: None,
///     contribution_rate: None,
/// };
///
/// let result =
///     monthly_employer_cost(&resource, &basis, &RatesConfig::default(), 1).unwrap();
/// assert_eq!(result.monthly_cost, Decimal::from_str("4137.8125").unwrap());
/// ```
pub fn monthly_employer_cost(
    resource: &Resource,
    basis: &SalaryBasis,
    config: &RatesConfig,
    step_number: u32,
) -> EngineResult<EmployerCostResult> {
    let mut audit_steps = Vec::new();
    let mut next_step = step_number;

    let (gross_salary, source) = match basis {
        SalaryBasis::GrossMonthly(gross) => (*gross, "gross_salary"),
        SalaryBasis::NetMonthly(net) => {
            let income_tax_rate = resource
                .income_tax_rate
                .unwrap_or(config.payroll.income_tax_rate);
            let contribution_rate = resource
                .contribution_rate
                .unwrap_or(config.payroll.contribution_rate);

            let estimate =
                estimate_gross_salary(*net, income_tax_rate, contribution_rate, next_step)?;
            audit_steps.push(estimate.audit_step);
            next_step += 1;
            (estimate.gross_salary, "estimated_from_net")
        }
    };

    let loading = config.employer.total();
    let multiplier = Decimal::ONE + loading / Decimal::ONE_HUNDRED;
    let monthly_cost = gross_salary * multiplier;

    audit_steps.push(AuditStep {
        step_number: next_step,
        rule_id: "employer_cost".to_string(),
        rule_name: "Employer Cost".to_string(),
        input: serde_json::json!({
            "resource_id": resource.id,
            "gross_salary": gross_salary.normalize().to_string(),
            "gross_source": source,
            "employer_loading_pct": loading.normalize().to_string()
        }),
        output: serde_json::json!({
            "monthly_cost": monthly_cost.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            gross_salary.normalize(),
            multiplier.normalize(),
            monthly_cost.normalize()
        ),
    });

    Ok(EmployerCostResult {
        monthly_cost,
        audit_steps,
    })
}
