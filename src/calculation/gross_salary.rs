//! Gross salary estimation functionality.
//!
//! This module provides the gross-up from a net monthly salary to the
//! corresponding gross figure, accounting for personal income tax (IRPEF)
//! and worker-side social contributions (INPS). The formula is an explicit
//! approximation, not a tax-compliant computation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of a gross salary estimation, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossSalaryResult {
    /// The estimated gross monthly salary.
    pub gross_salary: Decimal,
    /// The audit step recording this estimation.
    pub audit_step: AuditStep,
}

/// Estimates the gross monthly salary from a net monthly salary.
///
/// The net salary is roughly the gross minus income tax and worker-side
/// contributions, so the gross is recovered as:
///
/// ```text
/// gross = net / (1 - income_tax_rate/100 - contribution_rate/100)
/// ```
///
/// # Arguments
///
/// * `net_salary` - The net monthly salary
/// * `income_tax_rate` - The personal income-tax (IRPEF) rate, in percent
/// * `contribution_rate` - The social-contribution (INPS) rate, in percent
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `InvalidContributionRates` when the combined rates reach 100%,
/// which would make the divisor zero or negative.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::estimate_gross_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = estimate_gross_salary(
///     Decimal::from_str("2000").unwrap(),
///     Decimal::from_str("27").unwrap(),
///     Decimal::from_str("9").unwrap(),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.gross_salary, Decimal::from_str("3125").unwrap());
/// ```
pub fn estimate_gross_salary(
    net_salary: Decimal,
    income_tax_rate: Decimal,
    contribution_rate: Decimal,
    step_number: u32,
) -> EngineResult<GrossSalaryResult> {
    let combined = income_tax_rate + contribution_rate;
    if combined >= Decimal::ONE_HUNDRED {
        return Err(EngineError::InvalidContributionRates {
            income_tax_rate,
            contribution_rate,
        });
    }

    let divisor = Decimal::ONE - combined / Decimal::ONE_HUNDRED;
    let gross_salary = net_salary / divisor;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_salary_estimate".to_string(),
        rule_name: "Gross Salary Estimate".to_string(),
        input: serde_json::json!({
            "net_salary": net_salary.normalize().to_string(),
            "income_tax_rate": income_tax_rate.normalize().to_string(),
            "contribution_rate": contribution_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "divisor": divisor.normalize().to_string()
        }),
        reasoning: format!(
            "{} / (1 - {}% - {}%) = {}",
            net_salary.normalize(),
            income_tax_rate.normalize(),
            contribution_rate.normalize(),
            gross_salary.normalize()
        ),
    };

    Ok(GrossSalaryResult {
        gross_salary,
        audit_step,
    })
}
