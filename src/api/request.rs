//! Request types for the quote engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint. The resource shape mirrors what a pricing form submits: a flat
//! record where every monetary field is optional. The conversion into the
//! domain [`Resource`] resolves the ambiguity a form allows:
//!
//! * a gross salary takes precedence over a net salary;
//! * an hourly rate takes precedence over a monthly compensation;
//! * a resource with no monetary input at all costs zero.
//!
//! Fields that do not apply to the contract type (an hourly rate on an
//! employee, a net salary on a freelancer) are ignored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CompanyData, ContractKind, Engagement, FreelanceBasis, LegalForm, ProjectData, Resource,
    SalaryBasis,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains the full company snapshot needed to price the active project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The roster of team members and contractors.
    pub resources: Vec<ResourceRequest>,
    /// The company's annual fixed costs.
    #[serde(default)]
    pub fixed_costs: FixedCostsRequest,
    /// Every project in the plan.
    pub projects: Vec<ProjectRequest>,
    /// The id of the project being priced.
    pub active_project_id: String,
    /// Company fiscal parameters.
    pub company: CompanyRequest,
}

/// Resource information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// Unique identifier for the resource.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The kind of contract the resource works under.
    pub contract_type: ContractKind,
    /// Net monthly salary (employees and collaborators).
    #[serde(default)]
    pub net_salary: Option<Decimal>,
    /// Gross monthly salary; takes precedence over `net_salary`.
    #[serde(default)]
    pub gross_salary: Option<Decimal>,
    /// Hourly invoicing rate (freelancers).
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Flat monthly compensation; `hourly_rate` takes precedence.
    #[serde(default)]
    pub compensation: Option<Decimal>,
    /// The freelancer's own VAT rate, in percent.
    #[serde(default)]
    pub vat_rate: Option<Decimal>,
    /// Annual billable-hours capacity.
    pub annual_billable_hours: Decimal,
    /// Hours allocated to the active project; omit for full-time.
    #[serde(default)]
    pub project_hours: Option<Decimal>,
    /// Personal income-tax rate override, in percent.
    #[serde(default)]
    pub income_tax_rate: Option<Decimal>,
    /// Worker-side contribution rate override, in percent.
    #[serde(default)]
    pub contribution_rate: Option<Decimal>,
}

/// Annual fixed costs in a quote request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixedCostsRequest {
    /// Annual office rent.
    #[serde(default)]
    pub rent: Decimal,
    /// Annual utilities.
    #[serde(default)]
    pub utilities: Decimal,
    /// Annual software licences and subscriptions.
    #[serde(default)]
    pub software: Decimal,
    /// Annual hardware spend.
    #[serde(default)]
    pub hardware: Decimal,
    /// Annual marketing spend.
    #[serde(default)]
    pub marketing: Decimal,
    /// Annual administration and accounting fees.
    #[serde(default)]
    pub administration: Decimal,
    /// Annual insurance premiums.
    #[serde(default)]
    pub insurance: Decimal,
    /// Annual travel budget.
    #[serde(default)]
    pub travel: Decimal,
    /// Annual training budget.
    #[serde(default)]
    pub training: Decimal,
    /// Any other annual cost.
    #[serde(default)]
    pub other: Decimal,
    /// Free-text description of the `other` category.
    #[serde(default)]
    pub other_description: String,
}

/// Project information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRequest {
    /// Unique identifier for the project.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Non-personnel costs charged directly to the project.
    #[serde(default)]
    pub direct_costs: Decimal,
    /// Project duration in months.
    pub duration_months: Decimal,
}

/// Company fiscal parameters in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRequest {
    /// The company's legal form.
    #[serde(default = "default_legal_form")]
    pub legal_form: LegalForm,
    /// Regional business tax (IRAP) rate, in percent.
    pub irap_rate: Decimal,
    /// Desired profit margin, in percent.
    pub profit_margin: Decimal,
    /// VAT rate applied to the base price, in percent. Exactly zero means
    /// the company is VAT exempt.
    pub vat_rate: Decimal,
}

fn default_legal_form() -> LegalForm {
    LegalForm::LimitedCompany
}

impl From<ResourceRequest> for Resource {
    fn from(req: ResourceRequest) -> Self {
        let engagement = match req.contract_type {
            ContractKind::Employee => Engagement::Employee {
                pay: resolve_salary_basis(req.gross_salary, req.net_salary),
            },
            ContractKind::Collaborator => Engagement::Collaborator {
                pay: resolve_salary_basis(req.gross_salary, req.net_salary),
            },
            ContractKind::Freelancer => Engagement::Freelancer {
                pay: resolve_freelance_basis(req.hourly_rate, req.compensation),
                vat_rate: req.vat_rate,
            },
        };

        Resource {
            id: req.id,
            name: req.name,
            engagement,
            annual_billable_hours: req.annual_billable_hours,
            project_hours: req.project_hours,
            income_tax_rate: req.income_tax_rate,
            contribution_rate: req.contribution_rate,
        }
    }
}

fn resolve_salary_basis(gross: Option<Decimal>, net: Option<Decimal>) -> SalaryBasis {
    match (gross, net) {
        (Some(gross), _) => SalaryBasis::GrossMonthly(gross),
        (None, Some(net)) => SalaryBasis::NetMonthly(net),
        (None, None) => SalaryBasis::GrossMonthly(Decimal::ZERO),
    }
}

fn resolve_freelance_basis(
    hourly: Option<Decimal>,
    compensation: Option<Decimal>,
) -> FreelanceBasis {
    match (hourly, compensation) {
        (Some(rate), _) => FreelanceBasis::HourlyRate(rate),
        (None, Some(compensation)) => FreelanceBasis::MonthlyCompensation(compensation),
        (None, None) => FreelanceBasis::MonthlyCompensation(Decimal::ZERO),
    }
}

impl From<FixedCostsRequest> for crate::models::FixedCosts {
    fn from(req: FixedCostsRequest) -> Self {
        crate::models::FixedCosts {
            rent: req.rent,
            utilities: req.utilities,
            software: req.software,
            hardware: req.hardware,
            marketing: req.marketing,
            administration: req.administration,
            insurance: req.insurance,
            travel: req.travel,
            training: req.training,
            other: req.other,
            other_description: req.other_description,
        }
    }
}

impl From<ProjectRequest> for ProjectData {
    fn from(req: ProjectRequest) -> Self {
        ProjectData {
            id: req.id,
            name: req.name,
            direct_costs: req.direct_costs,
            duration_months: req.duration_months,
        }
    }
}

impl From<CompanyRequest> for CompanyData {
    fn from(req: CompanyRequest) -> Self {
        CompanyData {
            legal_form: req.legal_form,
            irap_rate: req.irap_rate,
            profit_margin: req.profit_margin,
            vat_rate: req.vat_rate,
        }
    }
}
