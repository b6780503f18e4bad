//! Company fiscal parameters.
//!
//! This module defines the [`CompanyData`] struct carrying the fiscal knobs
//! of the quoting company: legal form, regional business tax (IRAP), desired
//! profit margin, and VAT.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The legal form of the company.
///
/// Display-only: it does not affect any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalForm {
    /// Limited liability company (S.r.l.).
    LimitedCompany,
    /// Sole proprietorship / individual firm.
    SoleProprietorship,
}

/// Company-level fiscal parameters used by the pricing step.
///
/// All rates are percentages: they are divided by 100 inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyData {
    /// The legal form of the company.
    pub legal_form: LegalForm,
    /// Regional business-tax (IRAP) rate, applied to gross profit.
    pub irap_rate: Decimal,
    /// Desired profit margin, as a markup on total project cost.
    pub profit_margin: Decimal,
    /// Value-added tax rate. Exactly zero signals VAT exemption and
    /// short-circuits the final price to the base price.
    pub vat_rate: Decimal,
}
