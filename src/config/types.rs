//! Configuration types for the pricing engine.
//!
//! This module contains the strongly-typed rate parameters that are
//! deserialized from the YAML configuration file. The `Default`
//! implementations reproduce the canonical Italian approximations, so the
//! engine is fully usable without a configuration file on disk.

use rust_decimal::Decimal;
use serde::Deserialize;

const fn dec_whole(n: u32) -> Decimal {
    Decimal::from_parts(n, 0, 0, false, 0)
}

/// Default worker-side rates used to gross up a net salary when a resource
/// does not carry its own overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PayrollDefaults {
    /// Average personal income-tax (IRPEF) rate, in percent.
    pub income_tax_rate: Decimal,
    /// Worker-side social-contribution (INPS) rate, in percent.
    pub contribution_rate: Decimal,
}

impl Default for PayrollDefaults {
    fn default() -> Self {
        Self {
            income_tax_rate: dec_whole(27),
            contribution_rate: dec_whole(9),
        }
    }
}

/// Employer-side loadings applied on top of the gross salary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmployerLoadings {
    /// Employer-side social contribution (INPS), in percent.
    pub social_contribution: Decimal,
    /// Workplace-injury insurance (INAIL), in percent.
    pub injury_insurance: Decimal,
    /// Statutory severance accrual (TFR), in percent.
    pub severance_accrual: Decimal,
}

impl EmployerLoadings {
    /// The combined loading percentage applied multiplicatively to gross.
    pub fn total(&self) -> Decimal {
        self.social_contribution + self.injury_insurance + self.severance_accrual
    }
}

impl Default for EmployerLoadings {
    fn default() -> Self {
        Self {
            social_contribution: dec_whole(24),
            injury_insurance: dec_whole(1),
            // 7.41
            severance_accrual: Decimal::from_parts(741, 0, 0, false, 2),
        }
    }
}

/// The standard work schedule used to derive the full-time hours default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkSchedule {
    /// Standard working hours per week.
    pub weekly_hours: Decimal,
    /// Average number of weeks in a calendar month.
    pub weeks_per_month: Decimal,
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            weekly_hours: dec_whole(40),
            // 4.33
            weeks_per_month: Decimal::from_parts(433, 0, 0, false, 2),
        }
    }
}

/// The complete rate configuration for the engine.
///
/// Deserialized from `config/rates.yaml`; every section and field falls back
/// to its canonical default when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RatesConfig {
    /// Worker-side gross-up defaults.
    pub payroll: PayrollDefaults,
    /// Employer-side loadings.
    pub employer: EmployerLoadings,
    /// Standard work schedule.
    pub schedule: WorkSchedule,
}
