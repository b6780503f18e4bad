//! Resource model and related types.
//!
//! This module defines the [`Resource`] struct and the engagement enums that
//! describe how a team member is contracted and paid. The pay basis is a
//! tagged choice, so a resource can never carry two competing monetary
//! inputs at the same time; resolving ambiguous user input (both net and
//! gross supplied, or both hourly rate and compensation) is the job of the
//! API request layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of contract a resource works under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    /// Payroll employee, paid a monthly salary with full employer loadings.
    Employee,
    /// Coordinated collaborator (co.co.co.), treated like an employee for
    /// cost purposes.
    Collaborator,
    /// Independent contractor with a VAT number, invoicing by the hour or by
    /// a flat monthly compensation.
    Freelancer,
}

/// The monetary basis for a salaried resource (employee or collaborator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBasis {
    /// Gross monthly salary, used as-is.
    GrossMonthly(Decimal),
    /// Net monthly salary, grossed up with income-tax and contribution rates.
    NetMonthly(Decimal),
}

/// The monetary basis for a freelancer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreelanceBasis {
    /// Hourly invoicing rate, used as-is.
    HourlyRate(Decimal),
    /// Flat monthly compensation, converted to an hourly rate through the
    /// resource's monthly billable capacity.
    MonthlyCompensation(Decimal),
}

/// How a resource is engaged and paid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contract", rename_all = "snake_case")]
pub enum Engagement {
    /// Payroll employee.
    Employee {
        /// The salary basis.
        pay: SalaryBasis,
    },
    /// Coordinated collaborator.
    Collaborator {
        /// The salary basis.
        pay: SalaryBasis,
    },
    /// Independent contractor.
    Freelancer {
        /// The invoicing basis.
        pay: FreelanceBasis,
        /// The VAT rate the freelancer applies on invoices, in percent.
        /// Carried for completeness; it does not enter the cost arithmetic.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vat_rate: Option<Decimal>,
    },
}

impl Engagement {
    /// Returns the contract kind for this engagement.
    pub fn contract_kind(&self) -> ContractKind {
        match self {
            Engagement::Employee { .. } => ContractKind::Employee,
            Engagement::Collaborator { .. } => ContractKind::Collaborator,
            Engagement::Freelancer { .. } => ContractKind::Freelancer,
        }
    }
}

/// Represents one team member or contractor on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier for the resource.
    pub id: String,
    /// Display name.
    pub name: String,
    /// How the resource is contracted and paid.
    pub engagement: Engagement,
    /// Annual billable-hours capacity.
    pub annual_billable_hours: Decimal,
    /// Hours allocated to the active project. `None` means the resource is
    /// assumed full-time for the project duration; an explicit `0` is
    /// honored as zero hours.
    #[serde(default)]
    pub project_hours: Option<Decimal>,
    /// Personal income-tax (IRPEF) rate override, in percent. Only consulted
    /// when grossing up a net salary.
    #[serde(default)]
    pub income_tax_rate: Option<Decimal>,
    /// Worker-side social-contribution (INPS) rate override, in percent.
    /// Only consulted when grossing up a net salary.
    #[serde(default)]
    pub contribution_rate: Option<Decimal>,
}

impl Resource {
    /// Returns true if the resource is a freelancer.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_engine::models::{Engagement, FreelanceBasis, Resource};
    /// use rust_decimal::Decimal;
    ///
    /// let freelancer = Resource {
    ///     id: "res_001".to_string(),
    ///     name: "Ada".to_string(),
    ///     engagement: Engagement::Freelancer {
    ///         pay: FreelanceBasis::HourlyRate(Decimal::new(50, 0)),
    ///         vat_rate: None,
    ///     },
    ///     annual_billable_hours: Decimal::new(1320, 0),
    ///     project_hours: None,
    ///     income_tax_rate: None,
    ///     contribution_rate: None,
    /// };
    /// assert!(freelancer.is_freelancer());
    /// ```
    pub fn is_freelancer(&self) -> bool {
        matches!(self.engagement, Engagement::Freelancer { .. })
    }
}
