//! Calculation result models for the Cost-Plus Pricing Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a quote calculation, including
//! the monetary breakdown, the monthly overhead schedule, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The monetary breakdown of a quote.
///
/// Every field is derived; nothing is stored. Calling the engine twice with
/// identical inputs yields an identical breakdown.
///
/// # Example
///
/// ```
/// use quote_engine::models::QuoteBreakdown;
/// use rust_decimal::Decimal;
///
/// let quote = QuoteBreakdown {
///     personnel_cost: Decimal::new(4000, 0),
///     overhead_cost: Decimal::ZERO,
///     monthly_overhead: vec![],
///     total_project_cost: Decimal::new(4500, 0),
///     base_price: Decimal::new(5625, 0),
///     vat_amount: Decimal::ZERO,
///     final_price: Decimal::new(5625, 0),
///     gross_profit: Decimal::new(1125, 0),
///     irap_amount: Decimal::ZERO,
///     net_profit: Decimal::new(1125, 0),
/// };
/// assert_eq!(quote.final_price, quote.base_price);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    /// Total personnel cost for the active project.
    pub personnel_cost: Decimal,
    /// Overhead charged to the active project through the hourly overhead
    /// rate.
    pub overhead_cost: Decimal,
    /// Display-only overhead schedule: one entry per calendar month spanned
    /// by the union of all projects, each holding the monthly fixed-cost
    /// figure. Not used to derive `overhead_cost`.
    pub monthly_overhead: Vec<Decimal>,
    /// Personnel cost + overhead cost + direct costs of the active project.
    pub total_project_cost: Decimal,
    /// Total project cost marked up by the profit margin.
    pub base_price: Decimal,
    /// VAT applied on the base price. Zero when the company is VAT-exempt.
    pub vat_amount: Decimal,
    /// The client-facing price. Equals `base_price` exactly when the VAT
    /// rate is zero.
    pub final_price: Decimal,
    /// Base price minus total project cost.
    pub gross_profit: Decimal,
    /// Regional business tax (IRAP) on the gross profit.
    pub irap_amount: Decimal,
    /// Gross profit after IRAP.
    pub net_profit: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a quote calculation.
///
/// Wraps the [`QuoteBreakdown`] with identification metadata and the audit
/// trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The id of the project that was priced.
    pub project_id: String,
    /// The monetary breakdown.
    pub quote: QuoteBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
