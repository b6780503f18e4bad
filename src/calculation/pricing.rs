//! Pricing functionality.
//!
//! This module turns the total project cost into the client-facing price:
//! markup by the desired profit margin, regional business tax (IRAP) on the
//! gross profit, and VAT on the base price. A VAT rate of exactly zero is
//! treated as a first-class exemption, short-circuiting the final price to
//! the base price.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CompanyData};

/// The result of the pricing step, including the audit step.
#[derive(Debug, Clone)]
pub struct PricingResult {
    /// Total project cost marked up by the profit margin.
    pub base_price: Decimal,
    /// Base price minus total project cost.
    pub gross_profit: Decimal,
    /// IRAP on the gross profit.
    pub irap_amount: Decimal,
    /// Gross profit after IRAP.
    pub net_profit: Decimal,
    /// VAT on the base price; zero for an exempt company.
    pub vat_amount: Decimal,
    /// The client-facing price.
    pub final_price: Decimal,
    /// The audit step recording this pricing.
    pub audit_step: AuditStep,
}

/// Prices a project from its total cost and the company fiscal parameters.
///
/// ```text
/// base_price   = total_cost * (1 + profit_margin/100)
/// gross_profit = base_price - total_cost
/// irap_amount  = gross_profit * irap_rate/100
/// net_profit   = gross_profit - irap_amount
/// vat_amount   = base_price * vat_rate/100
/// final_price  = vat_rate == 0 ? base_price : base_price + vat_amount
/// ```
///
/// No rounding is applied; formatting is a presentation concern.
///
/// # Examples
///
/// ```
/// use quote_engine::calculation::price_from_cost;
/// use quote_engine::models::{CompanyData, LegalForm};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let company = CompanyData {
///     legal_form: LegalForm::LimitedCompany,
///     irap_rate: Decimal::from_str("3.9").unwrap(),
///     profit_margin: Decimal::from_str("25").unwrap(),
///     vat_rate: Decimal::ZERO,
/// };
///
/// let result = price_from_cost(Decimal::from_str("4500").unwrap(), &company, 1);
/// assert_eq!(result.base_price, Decimal::from_str("5625").unwrap());
/// assert_eq!(result.final_price, result.base_price);
/// ```
pub fn price_from_cost(
    total_cost: Decimal,
    company: &CompanyData,
    step_number: u32,
) -> PricingResult {
    let margin_multiplier = Decimal::ONE + company.profit_margin / Decimal::ONE_HUNDRED;
    let base_price = total_cost * margin_multiplier;
    let gross_profit = base_price - total_cost;

    let irap_amount = gross_profit * company.irap_rate / Decimal::ONE_HUNDRED;
    let net_profit = gross_profit - irap_amount;

    let vat_amount = base_price * company.vat_rate / Decimal::ONE_HUNDRED;
    let vat_exempt = company.vat_rate.is_zero();
    let final_price = if vat_exempt {
        base_price
    } else {
        base_price + vat_amount
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pricing".to_string(),
        rule_name: "Cost-Plus Pricing".to_string(),
        input: serde_json::json!({
            "total_project_cost": total_cost.normalize().to_string(),
            "profit_margin": company.profit_margin.normalize().to_string(),
            "irap_rate": company.irap_rate.normalize().to_string(),
            "vat_rate": company.vat_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_price": base_price.normalize().to_string(),
            "gross_profit": gross_profit.normalize().to_string(),
            "irap_amount": irap_amount.normalize().to_string(),
            "net_profit": net_profit.normalize().to_string(),
            "vat_amount": vat_amount.normalize().to_string(),
            "final_price": final_price.normalize().to_string(),
            "vat_exempt": vat_exempt
        }),
        reasoning: if vat_exempt {
            format!(
                "{} x {} = {}; VAT exempt, final price equals base price",
                total_cost.normalize(),
                margin_multiplier.normalize(),
                base_price.normalize()
            )
        } else {
            format!(
                "{} x {} = {}; + {}% VAT = {}",
                total_cost.normalize(),
                margin_multiplier.normalize(),
                base_price.normalize(),
                company.vat_rate.normalize(),
                final_price.normalize()
            )
        },
    };

    PricingResult {
        base_price,
        gross_profit,
        irap_amount,
        net_profit,
        vat_amount,
        final_price,
        audit_step,
    }
}
