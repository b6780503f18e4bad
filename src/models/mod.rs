//! Core data models for the Cost-Plus Pricing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod company;
mod fixed_costs;
mod project;
mod resource;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, QuoteBreakdown,
};
pub use company::{CompanyData, LegalForm};
pub use fixed_costs::FixedCosts;
pub use project::{MIN_PROJECT_DURATION_MONTHS, ProjectData, ProjectPlan};
pub use resource::{ContractKind, Engagement, FreelanceBasis, Resource, SalaryBasis};
