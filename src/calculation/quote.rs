//! Quote orchestration functionality.
//!
//! This module ties the individual rules together into the full quote
//! calculation: project-hours resolution, personnel cost, overhead
//! allocation, and pricing, with a complete audit trace. The monetary
//! breakdown is deterministic for identical inputs; only the result
//! metadata (id, timestamp, duration) differs between calls.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::RatesConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, CompanyData, FixedCosts, ProjectPlan,
    QuoteBreakdown, Resource,
};

use super::overhead::{allocate_overhead, monthly_overhead_schedule, total_annual_fixed_costs};
use super::personnel::personnel_cost;
use super::pricing::price_from_cost;
use super::project_hours::resolve_project_hours;

/// Calculates the complete quote for the active project of a plan.
///
/// This is the engine's entry point: a pure transformation of the input
/// snapshot into a [`CalculationResult`]. It never mutates its inputs and
/// performs no I/O.
///
/// # Arguments
///
/// * `resources` - The roster of team members and contractors
/// * `fixed_costs` - The company's annual fixed costs
/// * `plan` - Every project plus the id of the one being priced
/// * `company` - Company fiscal parameters
/// * `config` - The rate configuration
///
/// # Errors
///
/// * `ProjectNotFound` when the active project id is not in the plan
/// * `InvalidProject` when any project violates the duration minimum
/// * `InvalidContributionRates` when a resource's gross-up rates are
///   inconsistent
pub fn calculate_quote(
    resources: &[Resource],
    fixed_costs: &FixedCosts,
    plan: &ProjectPlan,
    company: &CompanyData,
    config: &RatesConfig,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    for project in &plan.projects {
        project.validate()?;
    }
    let active = plan.active()?;

    if resources.is_empty() {
        warnings.push(AuditWarning {
            code: "EMPTY_ROSTER".to_string(),
            message: "No resources supplied; personnel and overhead costs are zero".to_string(),
            severity: "medium".to_string(),
        });
    }

    // Resolve project hours, noting every full-time default in the trace.
    let mut allocations: Vec<(&Resource, Decimal)> = Vec::with_capacity(resources.len());
    for resource in resources {
        let hours = resolve_project_hours(resource, active.duration_months, &config.schedule);
        if resource.project_hours.is_none() {
            audit_steps.push(AuditStep {
                step_number,
                rule_id: "project_hours_default".to_string(),
                rule_name: "Full-Time Hours Default".to_string(),
                input: serde_json::json!({
                    "resource_id": resource.id,
                    "duration_months": active.duration_months.normalize().to_string(),
                    "weekly_hours": config.schedule.weekly_hours.normalize().to_string(),
                    "weeks_per_month": config.schedule.weeks_per_month.normalize().to_string()
                }),
                output: serde_json::json!({
                    "project_hours": hours.normalize().to_string()
                }),
                reasoning: format!(
                    "No explicit allocation; assuming full-time: round({} x {} x {}) = {}",
                    config.schedule.weekly_hours.normalize(),
                    config.schedule.weeks_per_month.normalize(),
                    active.duration_months.normalize(),
                    hours.normalize()
                ),
            });
            step_number += 1;
        }
        allocations.push((resource, hours));
    }

    let total_billable_hours: Decimal = resources
        .iter()
        .map(|r| r.annual_billable_hours)
        .sum();
    let project_total_hours: Decimal = allocations.iter().map(|(_, h)| *h).sum();

    let personnel = personnel_cost(&allocations, config, step_number)?;
    step_number += personnel.audit_steps.len() as u32;
    audit_steps.extend(personnel.audit_steps);

    if total_billable_hours.is_zero() && !total_annual_fixed_costs(fixed_costs).is_zero() {
        warnings.push(AuditWarning {
            code: "NO_BILLABLE_CAPACITY".to_string(),
            message: "Roster has no billable capacity; fixed costs were not allocated"
                .to_string(),
            severity: "medium".to_string(),
        });
    }

    let overhead = allocate_overhead(
        fixed_costs,
        total_billable_hours,
        project_total_hours,
        step_number,
    );
    step_number += 1;
    audit_steps.push(overhead.audit_step);

    let monthly_overhead = monthly_overhead_schedule(fixed_costs, &plan.projects);

    let total_project_cost = personnel.total_cost + overhead.overhead_cost + active.direct_costs;

    let pricing = price_from_cost(total_project_cost, company, step_number);
    audit_steps.push(pricing.audit_step);

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        project_id: active.id.clone(),
        quote: QuoteBreakdown {
            personnel_cost: personnel.total_cost,
            overhead_cost: overhead.overhead_cost,
            monthly_overhead,
            total_project_cost,
            base_price: pricing.base_price,
            vat_amount: pricing.vat_amount,
            final_price: pricing.final_price,
            gross_profit: pricing.gross_profit,
            irap_amount: pricing.irap_amount,
            net_profit: pricing.net_profit,
        },
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{Engagement, FreelanceBasis, LegalForm, ProjectData, SalaryBasis};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn approx_eq(actual: Decimal, expected: &str) {
        let expected = dec(expected);
        let tolerance = dec("0.01");
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    fn employee(net: &str, billable: &str, project_hours: Option<&str>) -> Resource {
        Resource {
            id: "res_emp".to_string(),
            name: "Employee".to_string(),
            engagement: Engagement::Employee {
                pay: SalaryBasis::NetMonthly(dec(net)),
            },
            annual_billable_hours: dec(billable),
            project_hours: project_hours.map(dec),
            income_tax_rate: None,
            contribution_rate: None,
        }
    }

    fn freelancer(rate: &str, billable: &str, project_hours: Option<&str>) -> Resource {
        Resource {
            id: "res_free".to_string(),
            name: "Freelancer".to_string(),
            engagement: Engagement::Freelancer {
                pay: FreelanceBasis::HourlyRate(dec(rate)),
                vat_rate: None,
            },
            annual_billable_hours: dec(billable),
            project_hours: project_hours.map(dec),
            income_tax_rate: None,
            contribution_rate: None,
        }
    }

    fn single_project_plan(duration: &str, direct_costs: &str) -> ProjectPlan {
        ProjectPlan {
            projects: vec![ProjectData {
                id: "prj_001".to_string(),
                name: "Test Project".to_string(),
                direct_costs: dec(direct_costs),
                duration_months: dec(duration),
            }],
            active_project_id: "prj_001".to_string(),
        }
    }

    fn company(margin: &str, irap: &str, vat: &str) -> CompanyData {
        CompanyData {
            legal_form: LegalForm::LimitedCompany,
            irap_rate: dec(irap),
            profit_margin: dec(margin),
            vat_rate: dec(vat),
        }
    }

    /// QT-001: employee end-to-end scenario
    #[test]
    fn test_employee_end_to_end() {
        let resources = vec![employee("2000", "1320", Some("160"))];
        let result = calculate_quote(
            &resources,
            &FixedCosts::default(),
            &single_project_plan("1", "0"),
            &company("25", "3.9", "22"),
            &RatesConfig::default(),
        )
        .unwrap();

        // gross 3125; employer 4137.8125; hourly 37.6165; x160 = 6018.64
        approx_eq(result.quote.personnel_cost, "6018.64");
        assert_eq!(result.quote.overhead_cost, Decimal::ZERO);
        approx_eq(result.quote.total_project_cost, "6018.64");
        approx_eq(result.quote.base_price, "7523.30");
        approx_eq(result.quote.final_price, "9178.42");
        assert_eq!(result.project_id, "prj_001");
    }

    /// QT-002: freelancer with direct costs and VAT exemption
    #[test]
    fn test_freelancer_vat_exempt() {
        let resources = vec![freelancer("40", "1320", Some("100"))];
        let result = calculate_quote(
            &resources,
            &FixedCosts::default(),
            &single_project_plan("1", "500"),
            &company("25", "3.9", "0"),
            &RatesConfig::default(),
        )
        .unwrap();

        assert_eq!(result.quote.personnel_cost, dec("4000"));
        assert_eq!(result.quote.total_project_cost, dec("4500"));
        assert_eq!(result.quote.final_price, result.quote.base_price);
    }

    /// QT-003: breakdown is deterministic across calls
    #[test]
    fn test_breakdown_deterministic() {
        let resources = vec![
            employee("2000", "1320", None),
            freelancer("50", "1500", Some("80")),
        ];
        let fixed_costs = FixedCosts {
            rent: dec("12000"),
            software: dec("3600"),
            ..FixedCosts::default()
        };
        let plan = single_project_plan("2.5", "1000");
        let fiscal = company("30", "3.9", "22");
        let config = RatesConfig::default();

        let first = calculate_quote(&resources, &fixed_costs, &plan, &fiscal, &config).unwrap();
        let second = calculate_quote(&resources, &fixed_costs, &plan, &fiscal, &config).unwrap();

        assert_eq!(first.quote, second.quote);
        assert_ne!(first.calculation_id, second.calculation_id);
    }

    /// QT-004: zero roster capacity degrades overhead to zero and warns
    #[test]
    fn test_zero_capacity_warns() {
        let resources = vec![freelancer("40", "0", Some("100"))];
        let fixed_costs = FixedCosts {
            rent: dec("12000"),
            ..FixedCosts::default()
        };

        let result = calculate_quote(
            &resources,
            &fixed_costs,
            &single_project_plan("1", "0"),
            &company("25", "3.9", "22"),
            &RatesConfig::default(),
        )
        .unwrap();

        assert_eq!(result.quote.overhead_cost, Decimal::ZERO);
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "NO_BILLABLE_CAPACITY")
        );
    }

    /// QT-005: empty roster warns and prices only the direct costs
    #[test]
    fn test_empty_roster_warns() {
        let result = calculate_quote(
            &[],
            &FixedCosts::default(),
            &single_project_plan("1", "800"),
            &company("25", "3.9", "0"),
            &RatesConfig::default(),
        )
        .unwrap();

        assert_eq!(result.quote.personnel_cost, Decimal::ZERO);
        assert_eq!(result.quote.total_project_cost, dec("800"));
        assert_eq!(result.quote.base_price, dec("1000"));
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == "EMPTY_ROSTER")
        );
    }

    /// QT-006: unknown active project id fails
    #[test]
    fn test_unknown_active_project_fails() {
        let mut plan = single_project_plan("1", "0");
        plan.active_project_id = "prj_999".to_string();

        let result = calculate_quote(
            &[freelancer("40", "1320", None)],
            &FixedCosts::default(),
            &plan,
            &company("25", "3.9", "22"),
            &RatesConfig::default(),
        );

        assert!(matches!(result, Err(EngineError::ProjectNotFound { .. })));
    }

    /// QT-007: too-short project duration fails
    #[test]
    fn test_too_short_duration_fails() {
        let result = calculate_quote(
            &[freelancer("40", "1320", None)],
            &FixedCosts::default(),
            &single_project_plan("0.25", "0"),
            &company("25", "3.9", "22"),
            &RatesConfig::default(),
        );

        assert!(matches!(result, Err(EngineError::InvalidProject { .. })));
    }

    /// QT-008: defaulted hours produce a trace step and drive overhead
    #[test]
    fn test_defaulted_hours_traced() {
        let resources = vec![employee("2000", "1320", None)];
        let fixed_costs = FixedCosts {
            rent: dec("13200"),
            ..FixedCosts::default()
        };

        let result = calculate_quote(
            &resources,
            &fixed_costs,
            &single_project_plan("1", "0"),
            &company("25", "3.9", "22"),
            &RatesConfig::default(),
        )
        .unwrap();

        assert!(
            result
                .audit_trace
                .steps
                .iter()
                .any(|s| s.rule_id == "project_hours_default")
        );
        // Rate 13200/1320 = 10/h over 173 defaulted hours.
        assert_eq!(result.quote.overhead_cost, dec("1730"));
    }

    /// QT-009: monthly schedule is carried in the breakdown
    #[test]
    fn test_monthly_schedule_in_breakdown() {
        let fixed_costs = FixedCosts {
            rent: dec("12000"),
            ..FixedCosts::default()
        };

        let result = calculate_quote(
            &[freelancer("40", "1320", Some("100"))],
            &fixed_costs,
            &single_project_plan("2.5", "0"),
            &company("25", "3.9", "22"),
            &RatesConfig::default(),
        )
        .unwrap();

        assert_eq!(result.quote.monthly_overhead.len(), 3);
        assert_eq!(result.quote.monthly_overhead[0], dec("1000"));
    }

    /// QT-010: audit steps are strictly sequential
    #[test]
    fn test_audit_steps_sequential() {
        let resources = vec![
            employee("2000", "1320", None),
            freelancer("50", "1500", Some("80")),
        ];

        let result = calculate_quote(
            &resources,
            &FixedCosts::default(),
            &single_project_plan("1", "0"),
            &company("25", "3.9", "22"),
            &RatesConfig::default(),
        )
        .unwrap();

        let numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
        assert_eq!(numbers, expected);
    }
}
